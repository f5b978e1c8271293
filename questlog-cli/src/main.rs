use anyhow::{Result, bail};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use questlog_core::{AppState, Difficulty, Recurrence, TaskDraft, TaskPatch};
use std::time::Duration;

mod store;

/// Delay between a mutation being persisted and the achievement re-scan,
/// so the scan always consumes the saved state.
const SCAN_DELAY: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "questlog", version, about = "Task tracking with RPG progression")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a recurring task
    Add {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Reset cadence: daily, weekly, monthly or yearly
        #[arg(long = "type", default_value = "daily")]
        recurrence: String,

        /// easy, medium, hard or legendary
        #[arg(long, default_value = "easy")]
        difficulty: String,

        /// Category id (health, learning, work, personal, social)
        #[arg(long, default_value = "personal")]
        category: String,

        /// Experience paid out on completion
        #[arg(long, default_value_t = 10)]
        xp: u32,
    },

    /// Mark a task completed and collect its experience
    Complete { id: String },

    /// Remove a task
    Delete { id: String },

    /// Patch task fields without touching completion state
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "type")]
        recurrence: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        xp: Option<u32>,
    },

    /// List tasks, most recent first
    List,

    /// Start a new period: clear completion on tasks of one cadence
    Reset {
        /// daily, weekly, monthly or yearly
        r#type: String,
    },

    /// Daily check-in: keeps the streak alive
    CheckIn,

    /// Player level, rank and counters
    Status,

    /// Achievement catalog with unlock state and progress
    Achievements,
}

fn parse_recurrence(s: &str) -> Result<Recurrence> {
    Ok(match s {
        "daily" => Recurrence::Daily,
        "weekly" => Recurrence::Weekly,
        "monthly" => Recurrence::Monthly,
        "yearly" => Recurrence::Yearly,
        other => bail!("unknown recurrence type: {other}"),
    })
}

fn parse_difficulty(s: &str) -> Result<Difficulty> {
    Ok(match s {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        "legendary" => Difficulty::Legendary,
        other => bail!("unknown difficulty: {other}"),
    })
}

/// Drain deferred achievement scans, announcing unlocks. Sleeps once before
/// the first scan so it runs strictly after the triggering mutation was
/// saved. Returns whether any scan ran.
async fn run_pending_scans(state: &mut AppState) -> bool {
    let mut ran = false;
    while state.take_pending_scan() {
        if !ran {
            tokio::time::sleep(SCAN_DELAY).await;
            ran = true;
        }
        for id in state.check_achievements(Utc::now()) {
            if let Some(a) = state.achievements.iter().find(|a| a.id == id) {
                println!(
                    "🏆 Achievement unlocked: {} {} (+{} xp)",
                    a.icon, a.title, a.experience_reward
                );
            }
        }
    }
    ran
}

fn print_tasks(state: &AppState) {
    if state.tasks.is_empty() {
        println!("No tasks yet. Add one with `questlog add <title>`.");
        return;
    }
    for t in &state.tasks {
        let mark = if t.completed { "x" } else { " " };
        println!(
            "[{mark}] #{} {} ({:?}, {:?}, {}, {} xp)",
            t.id, t.title, t.recurrence, t.difficulty, t.category, t.experience
        );
    }
}

fn print_status(state: &AppState) {
    let p = &state.player;
    println!("{} — level {}", p.rank, p.level);
    println!(
        "xp: {} total, {} to next level",
        p.total_experience, p.experience_to_next_level
    );
    println!(
        "str {} / agi {} / int {} / cha {}",
        p.stats.strength, p.stats.agility, p.stats.intelligence, p.stats.charisma
    );
    let s = &state.stats;
    println!(
        "completed: {} daily, {} weekly, {} monthly, {} yearly ({} total)",
        s.daily_completed, s.weekly_completed, s.monthly_completed, s.yearly_completed,
        s.total_tasks_completed
    );
    println!("streak: {} day(s)", s.streak_days);
}

fn print_achievements(state: &AppState) {
    for a in &state.achievements {
        if a.unlocked {
            let when = a
                .unlocked_at
                .map(|t| t.format(" on %Y-%m-%d").to_string())
                .unwrap_or_default();
            println!("{} {} — unlocked{} (+{} xp)", a.icon, a.title, when, a.experience_reward);
        } else {
            let progress: Vec<String> = a
                .progress(&state.tasks, &state.player, &state.stats)
                .into_iter()
                .map(|(cur, target)| format!("{cur}/{target}"))
                .collect();
            println!("{} {} — {} [{}]", a.icon, a.title, a.description, progress.join(", "));
        }
    }
}

/// Resolve today's calendar date in the profile timezone.
fn local_today(profile: &store::Profile) -> Result<chrono::NaiveDate> {
    let tz: Tz = profile
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {}", profile.timezone))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut state = store::load_state()?;
    let mut profile = store::read_profile()?;
    if profile.created_at_utc.is_none() {
        profile.created_at_utc = Some(Utc::now().to_rfc3339());
        store::write_profile(&profile)?;
    }

    let mutated = match cli.command {
        Command::Add {
            title,
            description,
            recurrence,
            difficulty,
            category,
            xp,
        } => {
            let draft = TaskDraft {
                title,
                description,
                recurrence: parse_recurrence(&recurrence)?,
                difficulty: parse_difficulty(&difficulty)?,
                category,
                experience: xp,
            };
            let id = state.add_task(draft, Utc::now());
            println!("Added task #{id}.");
            true
        }
        Command::Complete { id } => {
            let already_done = state
                .tasks
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.completed);
            state.complete_task(&id, Utc::now());
            match already_done {
                Some(false) => {
                    if let Some(t) = state.tasks.iter().find(|t| t.id == id) {
                        println!("Completed #{id}: {} (+{} xp)", t.title, t.experience);
                    }
                }
                Some(true) => println!("#{id} is already completed."),
                None => println!("No task #{id}."),
            }
            true
        }
        Command::Delete { id } => {
            state.delete_task(&id);
            println!("Deleted #{id} (if it existed).");
            true
        }
        Command::Update {
            id,
            title,
            description,
            recurrence,
            difficulty,
            category,
            xp,
        } => {
            let patch = TaskPatch {
                title,
                description,
                recurrence: recurrence.as_deref().map(parse_recurrence).transpose()?,
                difficulty: difficulty.as_deref().map(parse_difficulty).transpose()?,
                category,
                experience: xp,
            };
            state.update_task(&id, &patch);
            println!("Updated #{id} (if it existed).");
            true
        }
        Command::Reset { r#type } => {
            let recurrence = parse_recurrence(&r#type)?;
            state.reset_tasks(recurrence);
            println!("Reset {} tasks for the new period.", r#type);
            true
        }
        Command::CheckIn => {
            let today = local_today(&profile)?;
            state.check_in(today);
            println!("Checked in for {today}. Streak: {} day(s).", state.stats.streak_days);
            true
        }
        Command::List => {
            print_tasks(&state);
            false
        }
        Command::Status => {
            print_status(&state);
            false
        }
        Command::Achievements => {
            print_achievements(&state);
            false
        }
    };

    if mutated {
        store::save_state(&state)?;
    }

    // Deferred re-check: runs after the mutation above is durably visible.
    if run_pending_scans(&mut state).await {
        store::save_state(&state)?;
    }

    Ok(())
}
