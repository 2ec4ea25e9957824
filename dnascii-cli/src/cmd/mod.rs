pub(crate) mod analyze;
