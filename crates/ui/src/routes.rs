use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::LandingView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
}
