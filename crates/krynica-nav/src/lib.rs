//! Navigation: the page router and outbound share actions.

pub mod router;
pub mod share;

pub use router::{Page, Route, Router, parse_route};
pub use share::{ShareAction, ShareTarget, article_share_url, percent_encode};
