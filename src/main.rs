mod config;
mod errors;
mod lesson;
mod lessons;

use clap::{value_t, App, AppSettings, Arg};
use config::LessonConfig;
use engine::Context;
use errors::Result;
use failure::Fail;
use lessons::{Modulation, Sprites, TextLesson, Transform};
use log::{error, info, warn};
use std::path::Path;
use std::process;
use std::str::FromStr;

const DEFAULT_CONFIG: &str = "assets/lessons.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(size_str: &str) -> std::result::Result<Self, String> {
        size_str
            .find('x')
            .filter(|&x_index| x_index > 0 && x_index + 1 < size_str.len())
            .map(|x_index| (&size_str[..x_index], &size_str[x_index + 1..]))
            .and_then(|(width, height)| match (width.parse(), height.parse()) {
                (Ok(width), Ok(height)) => Some(Resolution { width, height }),
                _ => None,
            })
            .ok_or_else(|| "resolution format must be WIDTHxHEIGHT".to_owned())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LessonName {
    Sprites,
    Transform,
    Text,
    Modulation,
}

impl LessonName {
    pub const ALL: [LessonName; 4] = [
        LessonName::Sprites,
        LessonName::Transform,
        LessonName::Text,
        LessonName::Modulation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LessonName::Sprites => "sprites",
            LessonName::Transform => "transform",
            LessonName::Text => "text",
            LessonName::Modulation => "modulation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LessonName::Sprites => "sprite sheet walk cycle",
            LessonName::Transform => "rotation (A/D) and mirroring (Q/W/E) with rendered text",
            LessonName::Text => "text rendered with SDL_ttf",
            LessonName::Modulation => "colour (Q/W/E, A/S/D) and alpha (R/F) modulation",
        }
    }
}

impl FromStr for LessonName {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, String> {
        LessonName::ALL
            .iter()
            .copied()
            .find(|lesson| lesson.name() == name)
            .ok_or_else(|| format!("unknown lesson `{}`, run with --list-lessons", name))
    }
}

pub enum RunMode {
    ListLessons,
    Play {
        lesson: LessonName,
        config: LessonConfig,
    },
}

impl RunMode {
    pub fn from_args() -> Result<RunMode> {
        let matches = App::new("SDL Lessons")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Small SDL2 programs built around one texture handle.")
            .settings(&[AppSettings::ColoredHelp])
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .short("c")
                    .help("path to TOML lesson config")
                    .value_name("FILE"),
            )
            .arg(
                Arg::with_name("lesson")
                    .long("lesson")
                    .short("l")
                    .help("the lesson to run")
                    .value_name("NAME")
                    .default_value("transform"),
            )
            .arg(
                Arg::with_name("resolution")
                    .long("resolution")
                    .short("r")
                    .help("size of the window, overrides the config")
                    .value_name("WIDTHxHEIGHT"),
            )
            .arg(
                Arg::with_name("list-lessons")
                    .long("list-lessons")
                    .help("list the available lessons, then exit"),
            )
            .get_matches();

        if matches.is_present("list-lessons") {
            return Ok(RunMode::ListLessons);
        }

        let lesson = value_t!(matches, "lesson", LessonName)?;
        let mut config = match matches.value_of("config") {
            Some(path) => LessonConfig::from_file(path)?,
            None => default_config()?,
        };
        if matches.is_present("resolution") {
            let Resolution { width, height } = value_t!(matches, "resolution", Resolution)?;
            config.window.width = width;
            config.window.height = height;
        }
        Ok(RunMode::Play { lesson, config })
    }
}

fn default_config() -> Result<LessonConfig> {
    let path = Path::new(DEFAULT_CONFIG);
    if path.exists() {
        LessonConfig::from_file(path)
    } else {
        warn!("No config at {:?}, using defaults.", path);
        Ok(LessonConfig::default())
    }
}

fn run() -> Result<()> {
    match RunMode::from_args()? {
        RunMode::ListLessons => {
            for lesson in &LessonName::ALL {
                println!("{:12} {}", lesson.name(), lesson.description());
            }
        }
        RunMode::Play {
            lesson: name,
            config,
        } => {
            let mut context = Context::new(&config.window_config())?;
            match name {
                LessonName::Sprites => lesson::run::<Sprites>(&mut context, &config)?,
                LessonName::Transform => lesson::run::<Transform>(&mut context, &config)?,
                LessonName::Text => lesson::run::<TextLesson>(&mut context, &config)?,
                LessonName::Modulation => lesson::run::<Modulation>(&mut context, &config)?,
            }
            info!("Lesson loop ended, shutting down.");
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = run() {
        error!("Fatal error: {}", error);
        let mut cause: &dyn Fail = &error;
        while let Some(new_cause) = cause.cause() {
            cause = new_cause;
            error!("    caused by: {}", cause);
        }
        process::exit(1);
    }
}
