use crate::lang::{LangEntry, ScaleWords};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the `Lang` enum and every static table from one list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $variant:ident, $code_str:literal, $iso:literal, $name:literal,
        digits: [ $($d:literal),* $(,)? ],
        scale: {
            hundred: $hundred:literal,
            thousand: $thousand:literal,
            lakh: $lakh:literal,
            crore: $crore:literal $(,)?
        },
        units: { major: $major:literal, minor: $minor:literal, terminal: $terminal:literal $(,)? },
        phrases: { $($key:literal => $phrase:literal),* $(,)? }
    ),* $(,)?) => {
        /// Output language of the renderer and of the formatting helpers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Lang {
            $($variant),*
        }

        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang::$variant;
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static PHRASES: Map<&'static str, &'static str> = phf_map! {
                        $($key => $phrase),*
                    };

                    pub static ENTRY: LangEntry = LangEntry {
                        phrases: &PHRASES,
                        scale: ScaleWords {
                            hundred: $hundred,
                            thousand: $thousand,
                            lakh: $lakh,
                            crore: $crore,
                        },
                        major_unit: $major,
                        minor_unit: $minor,
                        terminal: $terminal,
                        native_digits: [$($d),*],
                    };
                }
            }
        )*

        /// Code lookup, accepting both the three-letter code and the ISO 639-1 tag.
        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $(
                $code_str => $code,
                $iso => $code,
            )*
        };

        pub(crate) static ALL_LANGS: &[Lang] = &[$($code),*];

        impl Lang {
            #[inline(always)]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Lang::$variant => $code_str),*
                }
            }

            #[inline(always)]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Lang::$variant => $name),*
                }
            }

            /// Static tables for this language.
            #[inline(always)]
            pub fn entry(&self) -> &'static LangEntry {
                paste! {
                    match self {
                        $(Lang::$variant => &[<$code:lower _data>]::ENTRY),*
                    }
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Phrase tables are exhaustive for 0..=99: neither language composes
//    tens and units by rule (Bengali numerals below one hundred are
//    irregular), so every entry is spelled out.
// ---------------------------------------------------------------------------
define_languages! {
    BEN, Bengali, "BEN", "BN", "Bengali",
        digits: ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'],
        scale: {
            hundred: "শত",
            thousand: "হাজার",
            lakh: "লক্ষ",
            crore: "কোটি",
        },
        units: { major: "টাকা", minor: "পয়সা", terminal: "মাত্র" },
        phrases: {
            "0" => "শূন্য",
            "1" => "এক",
            "2" => "দুই",
            "3" => "তিন",
            "4" => "চার",
            "5" => "পাঁচ",
            "6" => "ছয়",
            "7" => "সাত",
            "8" => "আট",
            "9" => "নয়",
            "10" => "দশ",
            "11" => "এগারো",
            "12" => "বারো",
            "13" => "তেরো",
            "14" => "চৌদ্দ",
            "15" => "পনেরো",
            "16" => "ষোল",
            "17" => "সতেরো",
            "18" => "আঠারো",
            "19" => "ঊনিশ",
            "20" => "বিশ",
            "21" => "একুশ",
            "22" => "বাইশ",
            "23" => "তেইশ",
            "24" => "চব্বিশ",
            "25" => "পঁচিশ",
            "26" => "ছাব্বিশ",
            "27" => "সাতাশ",
            "28" => "আটাশ",
            "29" => "ঊনত্রিশ",
            "30" => "ত্রিশ",
            "31" => "একত্রিশ",
            "32" => "বত্রিশ",
            "33" => "তেত্রিশ",
            "34" => "চৌত্রিশ",
            "35" => "পঁইত্রিশ",
            "36" => "ছত্রিশ",
            "37" => "সাইত্রিশ",
            "38" => "আটত্রিশ",
            "39" => "ঊনচল্লিশ",
            "40" => "চল্লিশ",
            "41" => "একচল্লিশ",
            "42" => "বিয়াল্লিশ",
            "43" => "তেতাল্লিশ",
            "44" => "চুয়াল্লিশ",
            "45" => "পঁইতাল্লিশ",
            "46" => "ছেচল্লিশ",
            "47" => "সাতচল্লিশ",
            "48" => "আটচল্লিশ",
            "49" => "ঊনপঞ্চাশ",
            "50" => "পঞ্চাশ",
            "51" => "একান্ন",
            "52" => "বায়ান্ন",
            "53" => "তিপ্পান্ন",
            "54" => "চুয়ান্ন",
            "55" => "পঁইচান্ন",
            "56" => "ছাপ্পান্ন",
            "57" => "সাতান্ন",
            "58" => "আটান্ন",
            "59" => "ঊনষাট",
            "60" => "ষাট",
            "61" => "একষট্টি",
            "62" => "বাষট্টি",
            "63" => "তেষট্টি",
            "64" => "চৌষট্টি",
            "65" => "পঁইষট্টি",
            "66" => "ছেষট্টি",
            "67" => "সাতষট্টি",
            "68" => "আটষট্টি",
            "69" => "ঊনসত্তর",
            "70" => "সত্তর",
            "71" => "একাত্তর",
            "72" => "বাহাত্তর",
            "73" => "তিয়াত্তর",
            "74" => "চুয়াত্তর",
            "75" => "পঁচাত্তর",
            "76" => "ছিয়াত্তর",
            "77" => "সাতাত্তর",
            "78" => "আটাত্তর",
            "79" => "ঊনআশি",
            "80" => "আশি",
            "81" => "একাশি",
            "82" => "বিরাশি",
            "83" => "তিরাশি",
            "84" => "চুরাশি",
            "85" => "পঁচাশি",
            "86" => "ছিয়াশি",
            "87" => "সাতাশি",
            "88" => "আটাশি",
            "89" => "ঊননব্বই",
            "90" => "নব্বই",
            "91" => "একানব্বই",
            "92" => "বিরানব্বই",
            "93" => "তিরানব্বই",
            "94" => "চুরানব্বই",
            "95" => "পঁচানব্বই",
            "96" => "ছিয়ানব্বই",
            "97" => "সাতানব্বই",
            "98" => "আটানব্বই",
            "99" => "নিরানব্বই",
        },

    ENG, English, "ENG", "EN", "English",
        digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        scale: {
            hundred: "Hundred",
            thousand: "Thousand",
            lakh: "Lakh",
            crore: "Crore",
        },
        units: { major: "Taka", minor: "Paisa", terminal: "Only" },
        phrases: {
            "0" => "Zero",
            "1" => "One",
            "2" => "Two",
            "3" => "Three",
            "4" => "Four",
            "5" => "Five",
            "6" => "Six",
            "7" => "Seven",
            "8" => "Eight",
            "9" => "Nine",
            "10" => "Ten",
            "11" => "Eleven",
            "12" => "Twelve",
            "13" => "Thirteen",
            "14" => "Fourteen",
            "15" => "Fifteen",
            "16" => "Sixteen",
            "17" => "Seventeen",
            "18" => "Eighteen",
            "19" => "Nineteen",
            "20" => "Twenty",
            "21" => "Twenty One",
            "22" => "Twenty Two",
            "23" => "Twenty Three",
            "24" => "Twenty Four",
            "25" => "Twenty Five",
            "26" => "Twenty Six",
            "27" => "Twenty Seven",
            "28" => "Twenty Eight",
            "29" => "Twenty Nine",
            "30" => "Thirty",
            "31" => "Thirty One",
            "32" => "Thirty Two",
            "33" => "Thirty Three",
            "34" => "Thirty Four",
            "35" => "Thirty Five",
            "36" => "Thirty Six",
            "37" => "Thirty Seven",
            "38" => "Thirty Eight",
            "39" => "Thirty Nine",
            "40" => "Forty",
            "41" => "Forty One",
            "42" => "Forty Two",
            "43" => "Forty Three",
            "44" => "Forty Four",
            "45" => "Forty Five",
            "46" => "Forty Six",
            "47" => "Forty Seven",
            "48" => "Forty Eight",
            "49" => "Forty Nine",
            "50" => "Fifty",
            "51" => "Fifty One",
            "52" => "Fifty Two",
            "53" => "Fifty Three",
            "54" => "Fifty Four",
            "55" => "Fifty Five",
            "56" => "Fifty Six",
            "57" => "Fifty Seven",
            "58" => "Fifty Eight",
            "59" => "Fifty Nine",
            "60" => "Sixty",
            "61" => "Sixty One",
            "62" => "Sixty Two",
            "63" => "Sixty Three",
            "64" => "Sixty Four",
            "65" => "Sixty Five",
            "66" => "Sixty Six",
            "67" => "Sixty Seven",
            "68" => "Sixty Eight",
            "69" => "Sixty Nine",
            "70" => "Seventy",
            "71" => "Seventy One",
            "72" => "Seventy Two",
            "73" => "Seventy Three",
            "74" => "Seventy Four",
            "75" => "Seventy Five",
            "76" => "Seventy Six",
            "77" => "Seventy Seven",
            "78" => "Seventy Eight",
            "79" => "Seventy Nine",
            "80" => "Eighty",
            "81" => "Eighty One",
            "82" => "Eighty Two",
            "83" => "Eighty Three",
            "84" => "Eighty Four",
            "85" => "Eighty Five",
            "86" => "Eighty Six",
            "87" => "Eighty Seven",
            "88" => "Eighty Eight",
            "89" => "Eighty Nine",
            "90" => "Ninety",
            "91" => "Ninety One",
            "92" => "Ninety Two",
            "93" => "Ninety Three",
            "94" => "Ninety Four",
            "95" => "Ninety Five",
            "96" => "Ninety Six",
            "97" => "Ninety Seven",
            "98" => "Ninety Eight",
            "99" => "Ninety Nine",
        },
}
