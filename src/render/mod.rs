pub(crate) mod composite;
pub(crate) mod layers;
pub(crate) mod mask;
pub(crate) mod pipeline;
