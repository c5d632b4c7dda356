use super::*;

const DEFAULT_MIN_LENGTH: usize = 100;
const DEFAULT_MAX_LENGTH: usize = 500;

#[derive(Debug, Parser)]
#[clap(about = "Measure your typing speed and accuracy in the terminal")]
pub(crate) struct Arguments {
  #[clap(long, conflicts_with_all = ["min_length", "max_length"], help = "Pick from every difficulty")]
  any: bool,
  #[clap(long, short, value_enum, default_value = "medium")]
  difficulty: Difficulty,
  #[clap(long, help = "Always use the first passage instead of a random one")]
  first: bool,
  #[clap(long, help = "Longest passage to pick, in characters")]
  max_length: Option<usize>,
  #[clap(long, help = "Shortest passage to pick, in characters")]
  min_length: Option<usize>,
  #[clap(long, short, value_enum, default_value = "fixed-time")]
  mode: Mode,
  #[clap(
    long,
    short,
    default_value = "60",
    value_parser = clap::value_parser!(u64).range(1..),
    help = "Seconds allowed in fixed time mode"
  )]
  time_limit: u64,
}

impl Arguments {
  fn passage(&self) -> Result<&'static str> {
    let mut passages = Passages::new(!self.first);

    if self.any {
      return Ok(passages.random_text());
    }

    if self.min_length.is_none() && self.max_length.is_none() {
      return Ok(passages.text(self.difficulty));
    }

    let min = self.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
    let max = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);

    if min > max {
      bail!("minimum length {min} is greater than maximum length {max}");
    }

    Ok(passages.text_by_length(min, max))
  }

  pub(crate) fn run(self) -> Result {
    let text = self.passage()?;

    if text.trim().is_empty() {
      bail!("no text available");
    }

    debug!("{self:?}");

    let results = App::new(self.mode, Duration::from_secs(self.time_limit), text).run()?;

    if let Some(results) = results {
      println!("{results}\n");
    }

    Ok(())
  }
}
