//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod predictor;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use predictor::FinancialPredictor;
pub(crate) use ui::{
    Alert, AlertKind, Button, Card, CardContent, CardFooter, CardHeader, Input, Label, Spinner,
};
