mod interface;

pub use interface::{DynAPI, RouteAPI, SuggestionAPI, API};
