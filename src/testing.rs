pub mod lang_contract;
