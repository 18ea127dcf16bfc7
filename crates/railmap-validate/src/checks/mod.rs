pub(crate) mod network;
pub(crate) mod station;
pub(crate) mod track;
