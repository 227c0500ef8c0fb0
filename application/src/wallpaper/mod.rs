pub mod pipeline;
pub mod service;

#[cfg(test)]
mod test_support;
