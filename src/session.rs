//! Dashboard session
//!
//! A session owns the one data bundle generated for it and the view
//! controller over that bundle. Nothing outlives the session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::dashboard::{render, RenderOptions};
use crate::data::{DataGenerator, GeneratorConfig};
use crate::view::{ViewController, ViewError};

pub const HELP: &str = "\
Commands:
  tab <overview|sales|customers|churn>   switch tab
  region <All|North|South|East|West>     set the region filter
  show                                   redraw the dashboard
  help                                   show this help
  quit                                   end the session";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(String),
    Region(String),
    Show,
    Help,
    Quit,
    /// Blank input
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "tab" => Command::Tab(rest.to_string()),
            "region" => Command::Region(rest.to_string()),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redrawn dashboard
    Render(String),
    /// Text for the user, state unchanged
    Message(String),
    Quit,
}

/// A single dashboard session
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    seed: Option<u64>,
    view: ViewController,
    options: RenderOptions,
}

impl Session {
    /// Generate the session's bundle and apply the configured starting view
    pub fn start(config: &DashboardConfig, options: RenderOptions) -> Result<Self, ViewError> {
        let state = config.initial_state()?;
        let mut generator = DataGenerator::new(GeneratorConfig { seed: config.seed });
        let view = ViewController::new(generator.generate()).with_state(state);

        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            seed: generator.seed(),
            view,
            options,
        };

        tracing::info!(
            session = %session.id,
            seed = ?session.seed,
            tab = %state.tab,
            region = %state.region,
            "Session started"
        );

        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewController {
        &mut self.view
    }

    /// Render the dashboard in its current state
    pub fn render(&self) -> String {
        render(&self.view, &self.options)
    }

    /// Apply one interactive command
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Tab(id) => match self.view.select_tab(&id) {
                Ok(_) => Outcome::Render(self.render()),
                Err(e) => Outcome::Message(e.to_string()),
            },
            Command::Region(name) => match self.view.select_region(&name) {
                Ok(_) => Outcome::Render(self.render()),
                Err(e) => Outcome::Message(e.to_string()),
            },
            Command::Show => Outcome::Render(self.render()),
            Command::Help => Outcome::Message(HELP.to_string()),
            Command::Empty => Outcome::Message(String::new()),
            Command::Unknown(line) => {
                Outcome::Message(format!("Unknown command: {} (type 'help')", line))
            }
            Command::Quit => {
                let elapsed = Utc::now() - self.started_at;
                tracing::info!(
                    session = %self.id,
                    duration_secs = elapsed.num_seconds(),
                    "Session ended"
                );
                Outcome::Quit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_seeded;
    use crate::view::{RegionFilter, Tab};

    fn session() -> Session {
        let config = DashboardConfig {
            seed: Some(21),
            ..Default::default()
        };
        Session::start(&config, RenderOptions::plain()).unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("tab churn"), Command::Tab("churn".to_string()));
        assert_eq!(
            Command::parse("  region   All Regions "),
            Command::Region("All Regions".to_string())
        );
        assert_eq!(Command::parse("SHOW"), Command::Show);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(
            Command::parse("refresh now"),
            Command::Unknown("refresh now".to_string())
        );
    }

    #[test]
    fn test_start_uses_seed_and_defaults() {
        let session = session();
        assert_eq!(session.seed(), Some(21));
        assert_eq!(session.view().bundle(), &generate_seeded(21));
        assert_eq!(session.view().selected_tab(), Tab::Overview);
        assert!(session.started_at() <= Utc::now());
    }

    #[test]
    fn test_start_rejects_unknown_default_tab() {
        let config = DashboardConfig {
            default_tab: "home".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Session::start(&config, RenderOptions::plain()),
            Err(ViewError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_apply_tab_and_region() {
        let mut session = session();

        match session.apply(Command::parse("tab churn")) {
            Outcome::Render(out) => assert!(out.contains("[ Churn Prediction ]")),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(session.view().selected_tab(), Tab::ChurnPrediction);

        assert!(matches!(
            session.apply(Command::parse("region South")),
            Outcome::Render(_)
        ));
        assert_eq!(session.view().selected_region(), RegionFilter::South);
    }

    #[test]
    fn test_apply_invalid_input_keeps_state() {
        let mut session = session();
        session.view_mut().set_tab(Tab::SalesAnalysis);

        assert_eq!(
            session.apply(Command::parse("tab not-a-real-tab")),
            Outcome::Message("Unknown tab: not-a-real-tab".to_string())
        );
        assert_eq!(session.view().selected_tab(), Tab::SalesAnalysis);

        assert!(matches!(
            session.apply(Command::parse("dance")),
            Outcome::Message(msg) if msg.starts_with("Unknown command")
        ));
        assert_eq!(session.apply(Command::Quit), Outcome::Quit);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(session().id(), session().id());
    }
}
