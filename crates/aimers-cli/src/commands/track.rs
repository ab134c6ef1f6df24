use aimers_core::StudentTrack;
use clap::Subcommand;

use super::{open_companion, print_json, CliResult};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Show the selected track
    Show,
    /// Select a track (HSC-11, HSC-12, Medical, Engineering, University)
    Set {
        track: StudentTrack,
    },
    /// Clear the selected track
    Clear,
    /// List the subjects of the selected track
    Subjects {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every available track
    List,
}

pub fn run(action: TrackAction) -> CliResult {
    let mut app = open_companion()?;

    match action {
        TrackAction::Show => match app.track() {
            Some(track) => println!("{track} ({})", track.label()),
            None => println!("no track selected"),
        },
        TrackAction::Set { track } => {
            let event = app.set_track(Some(track));
            print_json(&event)?;
        }
        TrackAction::Clear => {
            let event = app.set_track(None);
            print_json(&event)?;
        }
        TrackAction::Subjects { json } => {
            let subjects = app.subjects();
            if json {
                print_json(&subjects)?;
            } else if subjects.is_empty() {
                println!("no track selected");
            } else {
                for subject in subjects {
                    println!("{}", subject.name);
                }
            }
        }
        TrackAction::List => {
            for track in StudentTrack::ALL {
                println!("{:<12} {}", track.as_str(), track.label());
            }
        }
    }
    Ok(())
}
