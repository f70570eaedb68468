use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordfreq_core::Vocabulary;
use wordfreq_logging::{wf_debug, wf_info};

use crate::{AtomicFileWriter, EngineError, WordfreqConfig};

/// Writes `n` tokens sampled uniformly (with replacement) from `vocabulary`,
/// each followed by a single space. Returns the number of tokens written.
pub fn generate<W, R>(
    n: u64,
    vocabulary: &Vocabulary,
    destination: &mut W,
    rng: &mut R,
) -> io::Result<u64>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..n {
        let token = vocabulary.sample(rng).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot sample from an empty vocabulary",
            )
        })?;
        destination.write_all(token.as_bytes())?;
        destination.write_all(b" ")?;
    }
    Ok(n)
}

/// Generates `config.sample_count` tokens into `config.input_path`,
/// replacing any existing file.
pub fn generate_file(config: &WordfreqConfig) -> Result<u64, EngineError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => {
            wf_debug!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let writer = AtomicFileWriter::new(&config.input_path);
    let (written, path) = writer
        .write_with(|out| generate(config.sample_count, &config.vocabulary, out, &mut rng))
        .map_err(|e| EngineError::write(&config.input_path, e))?;

    wf_info!("Generated {} tokens into {:?}", written, path);
    Ok(written)
}
