#[cfg(test)]
mod test_store;
