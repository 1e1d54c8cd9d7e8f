//! Grid path routing over a blocking predicate, with deferred request
//! resolution.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod route;
pub mod router;
pub mod view;

pub use route::route;
pub use router::{PathPoll, PathRouter, PathTicket};
pub use view::BlockingView;
