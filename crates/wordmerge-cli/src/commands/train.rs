use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use wordmerge::{
    BpeModel,
    segmentation::markers::DEFAULT_UNK_TOKEN,
    training::{BpeTrainer, BpeTrainerOptions},
    vocab::io::write_model,
};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; each line is one sample.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size, including the unknown token.
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Reserved unknown token.
    #[arg(long, default_value = DEFAULT_UNK_TOKEN)]
    unk_token: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer = BpeTrainerOptions::new(self.vocab_size)
            .with_unk_token(self.unk_token.as_str())
            .init::<u64>();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text(&mut trainer, BufReader::new(File::open(path)?))?;
        }

        log::info!("Training Tokenizer...");
        let model: BpeModel<u32> = trainer.train()?;
        log::info!("Vocabulary Size: {}", model.vocab().len());

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_model(&model, &mut writer)?;

        Ok(())
    }
}

/// Feed every line of `reader` to the trainer.
fn read_text<R: BufRead>(
    trainer: &mut BpeTrainer<u64>,
    reader: R,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        trainer.update_from_samples([line?]);
    }
    Ok(())
}
