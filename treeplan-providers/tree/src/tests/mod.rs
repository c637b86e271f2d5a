pub(crate) use super::{NodeKind, TreeProviderError, TreeTopology};
