use thiserror::Error;
use crate::search::ALGORITHMS;

#[derive(Debug, Error, PartialEq)]
pub enum InstanceError {
    #[error("Cannot parse tile {token:?} in instance {instance}")]
    BadToken { token: String, instance: usize },
}

/// Groups tile tokens into puzzle instances. A token ending in `,` closes the
/// instance it belongs to; whatever is left at the end forms the last one.
///
/// `["1", "0", "2,", "3", "4"]` yields `[[1, 0, 2], [3, 4]]`.
pub fn split_instances<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Vec<u32>>, InstanceError> {
    let mut instances: Vec<Vec<u32>> = vec![];
    let mut current: Vec<u32> = vec![];

    for token in tokens {
        let token = token.as_ref().trim();
        let (value, closes) = match token.strip_suffix(',') {
            Some(value) => (value.trim(), true),
            None => (token, false),
        };

        if !value.is_empty() {
            let tile = value.parse::<u32>().map_err(|_| InstanceError::BadToken {
                token: value.to_string(),
                instance: instances.len() + 1,
            })?;
            current.push(tile);
        }

        if closes && !current.is_empty() {
            instances.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        instances.push(current);
    }

    Ok(instances)
}

/// Rewrites the single-dash selector spelling (`-bfs`, `-astar`, ...) to the
/// bare name clap expects. Other arguments pass through untouched.
pub fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(name) if ALGORITHMS.iter().any(|a| a.name() == name) => name.to_string(),
            _ => arg,
        })
        .collect()
}
