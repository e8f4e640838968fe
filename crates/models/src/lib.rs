pub mod errors;
pub mod db;
pub mod store;

#[cfg(test)]
mod tests;
