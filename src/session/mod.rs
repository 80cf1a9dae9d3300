pub(crate) mod preview;
