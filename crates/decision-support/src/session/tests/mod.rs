mod common;
mod state_machine;
