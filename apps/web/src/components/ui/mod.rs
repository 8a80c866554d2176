mod alert;
mod button;
mod card;
mod input;
mod label;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use card::{Card, CardContent, CardFooter, CardHeader};
pub(crate) use input::Input;
pub(crate) use label::Label;
pub(crate) use spinner::Spinner;
