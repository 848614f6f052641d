pub mod interpolation;

#[cfg(test)]
pub mod test_utils;
