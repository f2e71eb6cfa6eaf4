use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CallbackCommand {
    ViewProperties,
    RequestConsultation,
    ViewVillaPhotos,
    ContactUs,
}
