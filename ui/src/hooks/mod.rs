pub mod use_wash_history;
