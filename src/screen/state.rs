use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PlaceSuggestion, Region, RoutePath};
use crate::entities::{DESTINATION_PIN_COLOR, START_PIN_COLOR};
use crate::geo;

pub const MIN_QUERY_LEN: usize = 2;
pub const RECENTER_DURATION_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchRole {
    Start,
    Destination,
}

impl SearchRole {
    pub fn pin_color(self) -> &'static str {
        match self {
            Self::Start => START_PIN_COLOR,
            Self::Destination => DESTINATION_PIN_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    FocusChanged(SearchRole),
    QueryChanged { role: SearchRole, text: String },
    SuggestionSelected(PlaceSuggestion),
    RouteRequested,
    SuggestionsLoaded {
        generation: u64,
        suggestions: Vec<PlaceSuggestion>,
    },
    RouteLoaded { generation: u64, path: RoutePath },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchSuggestions { query: String, generation: u64 },
    FetchRoute {
        start: Coordinates,
        end: Coordinates,
        generation: u64,
    },
    AnimateTo { region: Region, duration_ms: u64 },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScreenState {
    pub start_query: String,
    pub destination_query: String,
    pub start_marker: Option<Coordinates>,
    pub destination_marker: Option<Coordinates>,
    pub suggestions: Vec<PlaceSuggestion>,
    pub active_role: Option<SearchRole>,
    pub route: RoutePath,
    pub distance_km: Option<f64>,
    suggestion_generation: u64,
    route_generation: u64,
}

impl ScreenState {
    pub fn apply(mut self, event: Event) -> (Self, Vec<Command>) {
        let mut commands = Vec::new();

        match event {
            Event::FocusChanged(role) => {
                self.active_role = Some(role);
            }
            Event::QueryChanged { role, text } => {
                match role {
                    SearchRole::Start => self.start_query = text.clone(),
                    SearchRole::Destination => self.destination_query = text.clone(),
                }

                if text.chars().count() >= MIN_QUERY_LEN {
                    self.suggestion_generation += 1;
                    commands.push(Command::FetchSuggestions {
                        query: text,
                        generation: self.suggestion_generation,
                    });
                }
            }
            Event::SuggestionSelected(place) => {
                self.suggestions.clear();
                // in-flight fetches must not repopulate the dismissed list
                self.suggestion_generation += 1;

                match self.active_role {
                    Some(SearchRole::Start) => {
                        self.start_query = place.name.clone();
                        self.start_marker = Some(place.coordinates);
                    }
                    Some(SearchRole::Destination) => {
                        self.destination_query = place.name.clone();
                        self.destination_marker = Some(place.coordinates);
                    }
                    None => {}
                }

                self.refresh_distance();

                commands.push(Command::AnimateTo {
                    region: Region::selection(place.coordinates),
                    duration_ms: RECENTER_DURATION_MS,
                });
            }
            Event::RouteRequested => {
                if let (Some(start), Some(end)) = (self.start_marker, self.destination_marker) {
                    self.route_generation += 1;
                    commands.push(Command::FetchRoute {
                        start,
                        end,
                        generation: self.route_generation,
                    });
                }
            }
            Event::SuggestionsLoaded {
                generation,
                suggestions,
            } => {
                if generation == self.suggestion_generation {
                    self.suggestions = suggestions;
                }
            }
            Event::RouteLoaded { generation, path } => {
                if generation == self.route_generation {
                    self.route = path;
                }
            }
        }

        (self, commands)
    }

    fn refresh_distance(&mut self) {
        self.distance_km = match (self.start_marker, self.destination_marker) {
            (Some(a), Some(b)) => Some(geo::distance_km(a, b)),
            _ => None,
        };
    }
}
