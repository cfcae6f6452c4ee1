mod state;

pub use state::{Command, Event, ScreenState, SearchRole, MIN_QUERY_LEN, RECENTER_DURATION_MS};

use crate::api::API;
use crate::entities::PlaceSuggestion;

pub struct MapScreen<A: API> {
    state: ScreenState,
    api: A,
}

impl<A: API> MapScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: ScreenState::default(),
            api,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn focus(&mut self, role: SearchRole) {
        self.dispatch(Event::FocusChanged(role));
    }

    pub async fn edit_query(&mut self, role: SearchRole, text: impl Into<String>) -> Vec<Command> {
        self.run(Event::QueryChanged {
            role,
            text: text.into(),
        })
        .await
    }

    pub fn select_suggestion(&mut self, place: PlaceSuggestion) -> Vec<Command> {
        self.dispatch(Event::SuggestionSelected(place))
    }

    pub async fn request_route(&mut self) -> Vec<Command> {
        self.run(Event::RouteRequested).await
    }

    // Fetch commands are executed inline and their completions fed back
    // through `apply`; commands meant for the map widget are returned.
    async fn run(&mut self, event: Event) -> Vec<Command> {
        let commands = self.dispatch(event);
        let mut host_commands = Vec::new();

        for command in commands {
            match command {
                Command::FetchSuggestions { query, generation } => {
                    match self.api.find_suggestions(&query).await {
                        Ok(suggestions) => {
                            self.dispatch(Event::SuggestionsLoaded {
                                generation,
                                suggestions,
                            });
                        }
                        Err(err) => {
                            tracing::error!(
                                code = err.code,
                                message = %err.message,
                                "error fetching location suggestions"
                            );
                        }
                    }
                }
                Command::FetchRoute {
                    start,
                    end,
                    generation,
                } => match self.api.find_route(start, end).await {
                    Ok(path) => {
                        self.dispatch(Event::RouteLoaded { generation, path });
                    }
                    Err(err) => {
                        tracing::error!(
                            code = err.code,
                            message = %err.message,
                            "error fetching route"
                        );
                    }
                },
                other => host_commands.push(other),
            }
        }

        host_commands
    }

    fn dispatch(&mut self, event: Event) -> Vec<Command> {
        let (state, commands) = std::mem::take(&mut self.state).apply(event);
        self.state = state;
        commands
    }
}
