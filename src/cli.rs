use crate::constants::DEFAULT_IMAGE_MODEL;
use crate::error::{Result, WhiskError};
use crate::recipe::{AspectRatio, MediaCategory, MediaInput, RecipeMediaInput};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RecipeArgs {
    pub instruction: String,
    pub aspect_ratio: AspectRatio,
    pub seed: Option<u32>,
    pub image_model: String,
    pub output_dir: Option<PathBuf>,
    pub media_inputs: Vec<RecipeMediaInput>,
}

pub const HELP_FLAGS: [&str; 3] = ["-h", "-help", "--help"];

pub fn is_help_requested(args: &[String]) -> bool {
    args.len() < 2
        || args
            .iter()
            .skip(1)
            .any(|arg| HELP_FLAGS.contains(&arg.as_str()))
}

/// Parses `argv` (program name first). Option order is free; every word that is not an
/// option or an option value becomes part of the instruction. Words after `--` are taken
/// literally, and any other word starting with `-` must be a known option.
pub fn parse_args(args: &[String]) -> Result<RecipeArgs> {
    let mut aspect_ratio = AspectRatio::default();
    let mut seed = None;
    let mut image_model = DEFAULT_IMAGE_MODEL.to_string();
    let mut output_dir = None;
    let mut media_inputs = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-a" | "--aspect" => aspect_ratio = option_value(&mut iter, arg)?.parse()?,
            "-s" | "--seed" => {
                let value = option_value(&mut iter, arg)?;
                seed = Some(value.parse::<u32>().map_err(|_| {
                    WhiskError::InvalidArgument(format!("seed must be a number, got '{}'", value))
                })?);
            }
            "-m" | "--model" => image_model = option_value(&mut iter, arg)?.to_string(),
            "-o" | "--out" => output_dir = Some(PathBuf::from(option_value(&mut iter, arg)?)),
            "--subject" => media_inputs.push(media_input(
                MediaCategory::Subject,
                option_value(&mut iter, arg)?,
            )?),
            "--scene" => media_inputs.push(media_input(
                MediaCategory::Scene,
                option_value(&mut iter, arg)?,
            )?),
            "--style" => media_inputs.push(media_input(
                MediaCategory::Style,
                option_value(&mut iter, arg)?,
            )?),
            "--" => {
                words.extend(iter.by_ref().map(|w| w.as_str()));
            }
            word if word.starts_with('-') && word.len() > 1 => {
                return Err(WhiskError::InvalidArgument(format!(
                    "unknown option '{}', use -- before an instruction that starts with '-'",
                    word
                )));
            }
            word => words.push(word),
        }
    }

    let instruction = words.join(" ").trim().to_string();
    if instruction.is_empty() {
        return Err(WhiskError::InvalidArgument(
            "an instruction is required".to_string(),
        ));
    }

    Ok(RecipeArgs {
        instruction,
        aspect_ratio,
        seed,
        image_model,
        output_dir,
        media_inputs,
    })
}

fn option_value<'a, I>(iter: &mut I, flag: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .map(|v| v.as_str())
        .ok_or_else(|| WhiskError::InvalidArgument(format!("missing value for {}", flag)))
}

/// `<mediaGenerationId>[:caption]`
fn media_input(category: MediaCategory, spec: &str) -> Result<RecipeMediaInput> {
    let (id, caption) = match spec.split_once(':') {
        Some((id, caption)) => (id.trim(), caption.trim()),
        None => (spec.trim(), ""),
    };
    if id.is_empty() {
        return Err(WhiskError::InvalidArgument(format!(
            "empty media generation id in '{}'",
            spec
        )));
    }

    Ok(RecipeMediaInput {
        caption: caption.to_string(),
        media_input: MediaInput {
            media_category: category,
            media_generation_id: id.to_string(),
        },
    })
}
