use strum::{Display, EnumString};

/// Coarse dependency relation of a token to its head.
///
/// Only the relations needed to recognise passive constructions are
/// distinguished; everything else is [`Dependency::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum Dependency {
    /// Subject of a passive clause ("The samples were analysed")
    #[strum(serialize = "nsubjpass")]
    PassiveNominalSubject,

    /// Passive auxiliary ("The samples were analysed")
    #[strum(serialize = "auxpass")]
    PassiveAuxiliary,

    #[default]
    #[strum(serialize = "dep")]
    Unspecified,
}
