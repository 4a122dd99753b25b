mod branch_history;
mod global_history;
