use std::io::{BufRead, Write};

use wordmerge::BpeTokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    /// Path to a trained JSON model.
    #[arg(long)]
    model: String,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        log::info!("Loading model: {}", self.model);
        let tokenizer: BpeTokenizer<u32> = BpeTokenizer::load(&self.model)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

/// Encode each input line as a line of space-separated token ids.
fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &BpeTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = tokenizer.encode(&line)?;

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

/// Decode each line of space-separated token ids as a line of text.
fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &BpeTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        let text = tokenizer.decode(&tokens)?;

        writeln!(writer, "{text}")?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn tokenizer() -> BpeTokenizer<u32> {
        let mut tokenizer = BpeTokenizer::default();
        tokenizer
            .train(["the quick brown fox", "the quick blue hare"], 30)
            .unwrap();
        tokenizer
    }

    #[test]
    fn test_encode_then_decode() {
        let tokenizer = tokenizer();

        let mut encoded = Vec::new();
        run_cat_encode(
            &mut Cursor::new("the quick fox\n  blue  hare \n"),
            &mut encoded,
            &tokenizer,
        )
        .unwrap();

        let encoded = String::from_utf8(encoded).unwrap();
        assert_eq!(encoded.lines().count(), 2);

        let mut decoded = Vec::new();
        run_cat_decode(&mut Cursor::new(encoded), &mut decoded, &tokenizer).unwrap();

        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "the quick fox\nblue hare\n"
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let tokenizer = tokenizer();

        let mut out = Vec::new();
        assert!(run_cat_decode(&mut Cursor::new("1 two 3\n"), &mut out, &tokenizer).is_err());
    }
}
