pub mod db;
pub mod book;

#[cfg(test)]
mod tests;
