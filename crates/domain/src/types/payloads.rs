//! Request body envelopes
//!
//! Every write operation except certificate upload wraps the caller's object
//! under a named key. The envelopes borrow the caller's value so a request
//! never needs to clone it before serialization.

use serde::Serialize;

/// `{"config": ...}` for `POST /config`
#[derive(Debug, Serialize)]
pub struct ConfigBody<'a, T: ?Sized> {
    pub config: &'a T,
}

/// `{"route": ...}` for `POST /routes`
#[derive(Debug, Serialize)]
pub struct RouteBody<'a, T: ?Sized> {
    pub route: &'a T,
}

/// `{"updates": ...}` for `PUT /routes/{id}`
#[derive(Debug, Serialize)]
pub struct RouteUpdateBody<'a, T: ?Sized> {
    pub updates: &'a T,
}

/// `{"route_id": ..., "defense_config": ...}` for `POST /defense/enable`
#[derive(Debug, Serialize)]
pub struct DefenseEnableBody<'a, T: ?Sized> {
    pub route_id: &'a str,
    pub defense_config: &'a T,
}

/// `{"defense_config": ...}` for `POST /defense/update-all`
#[derive(Debug, Serialize)]
pub struct DefenseConfigBody<'a, T: ?Sized> {
    pub defense_config: &'a T,
}

/// `{"request": ...}` for `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeBody<'a, T: ?Sized> {
    pub request: &'a T,
}
