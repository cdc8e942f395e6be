mod classify;
mod help;
mod lookup;
mod report;
mod utils;
