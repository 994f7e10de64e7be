use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::convert::FromArg;
use crate::error::{ArgsError, Result};
use crate::key::OptionKey;
use crate::snapshot::Snapshot;
use crate::token::{TokenKind, classify, split_inline, takes_next};

/// Tokenized command line.
///
/// Built once by [`Args::parse`] or [`Args::from_env`]; afterwards options are
/// pulled out with [`Args::get`] and [`Args::get_or`]. Every successful lookup
/// removes the entry it matched, so a second lookup for the same key reads as
/// absent.
///
/// # Value attachment
///
/// An option takes the following token as its value when that token does not
/// start with `-`, or starts with `-` and a digit (`--offset -402`). This is
/// decided without knowing which options expect values, so `--verbose file`
/// binds `file` to `--verbose`. An option carrying an inline `=` value never
/// takes the next token: `--sel=a file` leaves `file` positional.
#[derive(Debug, Clone, Default)]
pub struct Args {
    long: IndexMap<String, String>,
    short: IndexMap<char, String>,
    clusters: Vec<String>,
    positionals: Vec<String>,
}

/// Typed lookup dispatch for [`Args::get`].
///
/// Every [`FromArg`] type reads as `Option<T>`. `bool` reads as a plain
/// `bool`: it is `true` when the option is present in any form.
pub trait Lookup: Sized {
    type Output;

    #[doc(hidden)]
    fn lookup(args: &mut Args, key: &OptionKey) -> Result<Self::Output>;
}

impl<T: FromArg> Lookup for T {
    type Output = Option<T>;

    fn lookup(args: &mut Args, key: &OptionKey) -> Result<Self::Output> {
        args.value(key)
    }
}

impl Lookup for bool {
    type Output = bool;

    fn lookup(args: &mut Args, key: &OptionKey) -> Result<Self::Output> {
        args.flag(key)
    }
}

/// Which representations of one key were found by `Args::locate`.
///
/// Long and short-split entries are already removed from their stores;
/// cluster hits depend on the scan mode.
#[derive(Debug)]
struct Located {
    long: Option<String>,
    short: Option<String>,
    cluster: ClusterMatch,
}

#[derive(Debug, Default)]
enum ClusterMatch {
    #[default]
    None,
    /// First cluster hit, still in place.
    At { token: usize, offset: usize },
    /// Number of occurrences stripped from all clusters.
    Stripped(usize),
}

#[derive(Debug, Clone, Copy)]
enum Scan {
    First,
    StripAll,
}

impl Located {
    fn forms(&self) -> usize {
        let cluster = !matches!(self.cluster, ClusterMatch::None);
        [self.long.is_some(), self.short.is_some(), cluster]
            .into_iter()
            .filter(|found| *found)
            .count()
    }

    fn ensure_single_form(&self, key: &OptionKey) -> Result<()> {
        if self.forms() > 1 {
            return Err(ArgsError::ConflictingRepresentation { key: key.clone() });
        }
        Ok(())
    }
}

impl Args {
    /// Tokenize `argv`. The first item is the program name and is skipped.
    pub fn parse<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().skip(1).map(Into::into).collect();
        let mut args = Self::default();

        let mut i = 0usize;
        while i < argv.len() {
            let token = argv[i].as_str();
            let kind = classify(token);
            let body = match kind {
                TokenKind::Long(body) | TokenKind::Short(body) => body,
                TokenKind::Positional => {
                    trace!(token, "positional");
                    args.positionals.push(token.to_string());
                    i += 1;
                    continue;
                }
            };

            // `--name=value` and `-c=value` never reach for the next token.
            let detached = match argv.get(i + 1) {
                Some(next) if split_inline(body).is_none() && takes_next(next) => {
                    i += 1;
                    Some(next.as_str())
                }
                _ => None,
            };

            if let TokenKind::Long(_) = kind {
                args.add_long(body, detached);
            } else {
                args.add_short(token, body, detached)?;
            }
            i += 1;
        }

        debug!(
            long = args.long.len(),
            short = args.short.len(),
            clusters = args.clusters.len(),
            positionals = args.positionals.len(),
            "tokenized arguments"
        );
        Ok(args)
    }

    /// Tokenize the arguments of the current process.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    fn add_long(&mut self, body: &str, detached: Option<&str>) {
        let (name, value) = match split_inline(body) {
            Some((name, value)) => (name, value),
            None => (body, detached.unwrap_or_default()),
        };
        trace!(name, value, "long option");
        self.long.insert(name.to_string(), value.to_string());
    }

    fn add_short(&mut self, token: &str, body: &str, detached: Option<&str>) -> Result<()> {
        if let Some((name, value)) = split_inline(body) {
            // Only the first character names the option: `-Xy=z` sets `X`.
            let Some(flag) = name.chars().next() else {
                return Err(ArgsError::InvalidShortOptionShape {
                    token: token.to_string(),
                    reason: "no option character before '='",
                });
            };
            trace!(flag = %flag, value, "short option");
            self.short.insert(flag, value.to_string());
            return Ok(());
        }

        if let Some(value) = detached {
            let mut chars = body.chars();
            let (Some(flag), None) = (chars.next(), chars.next()) else {
                return Err(ArgsError::InvalidShortOptionShape {
                    token: token.to_string(),
                    reason: "a short option with a detached value must be exactly one character",
                });
            };
            trace!(flag = %flag, value, "short option");
            self.short.insert(flag, value.to_string());
            return Ok(());
        }

        trace!(cluster = body, "short cluster");
        self.clusters.push(body.to_string());
        Ok(())
    }

    /// Look up one option and consume it.
    ///
    /// For any [`FromArg`] type this returns `Ok(None)` when the option is
    /// absent and `Ok(Some(value))` otherwise. For `bool` it returns whether
    /// the option was present at all; any value attached to it is discarded.
    ///
    /// # Errors
    ///
    /// - [`ArgsError::ConflictingRepresentation`] when the option is given in
    ///   more than one form, e.g. `--name x -n y`.
    /// - [`ArgsError::DuplicateBooleanFlag`] when a boolean's short character
    ///   occurs more than once across short clusters (`-Sr -S`).
    /// - [`ArgsError::Conversion`] when the text does not convert to `T`.
    pub fn get<T: Lookup>(&mut self, key: impl Into<OptionKey>) -> Result<T::Output> {
        T::lookup(self, &key.into())
    }

    /// Like [`Args::get`] but falls back to `default` when the option is
    /// absent. Errors are still reported.
    pub fn get_or<T: FromArg>(&mut self, key: impl Into<OptionKey>, default: T) -> Result<T> {
        Ok(self.value(&key.into())?.unwrap_or(default))
    }

    fn value<T: FromArg>(&mut self, key: &OptionKey) -> Result<Option<T>> {
        let located = self.locate(key, Scan::First);
        located.ensure_single_form(key)?;

        let raw = match (located.long, located.short, located.cluster) {
            (Some(value), _, _) | (None, Some(value), _) => value,
            (None, None, ClusterMatch::At { token, offset }) => {
                self.take_from_cluster(token, offset, key.short())
            }
            _ => return Ok(None),
        };

        T::from_arg(&raw)
            .map(Some)
            .map_err(|source| ArgsError::Conversion {
                key: key.clone(),
                value: raw,
                target: std::any::type_name::<T>(),
                source,
            })
    }

    fn flag(&mut self, key: &OptionKey) -> Result<bool> {
        let located = self.locate(key, Scan::StripAll);
        if let ClusterMatch::Stripped(count) = located.cluster {
            if count > 1 {
                return Err(ArgsError::DuplicateBooleanFlag {
                    flag: key.short(),
                    count,
                });
            }
        }
        located.ensure_single_form(key)?;
        Ok(located.forms() == 1)
    }

    /// Find every representation of `key`, removing long and short-split
    /// entries from their stores.
    fn locate(&mut self, key: &OptionKey, scan: Scan) -> Located {
        let flag = key.short();
        let long = self.long.shift_remove(key.long());
        let short = self.short.shift_remove(&flag);
        let cluster = match scan {
            Scan::First => self.find_in_clusters(flag),
            Scan::StripAll => match self.strip_from_clusters(flag) {
                0 => ClusterMatch::None,
                count => ClusterMatch::Stripped(count),
            },
        };
        trace!(
            key = %key,
            long = long.is_some(),
            short = short.is_some(),
            ?cluster,
            "located option"
        );
        Located {
            long,
            short,
            cluster,
        }
    }

    /// Prefer a cluster that starts with `flag` (an attached value such as
    /// `-c155`), then the first cluster containing it anywhere.
    fn find_in_clusters(&self, flag: char) -> ClusterMatch {
        if let Some(token) = self.clusters.iter().position(|c| c.starts_with(flag)) {
            return ClusterMatch::At { token, offset: 0 };
        }
        self.clusters
            .iter()
            .enumerate()
            .find_map(|(token, cluster)| {
                cluster
                    .find(flag)
                    .map(|offset| ClusterMatch::At { token, offset })
            })
            .unwrap_or_default()
    }

    /// Consume a cluster hit and return its payload.
    ///
    /// A cluster led by `flag` with more characters after it yields the rest
    /// as an attached value and is removed whole. Otherwise the payload is
    /// `flag` itself and only that character is removed.
    fn take_from_cluster(&mut self, token: usize, offset: usize, flag: char) -> String {
        let cluster = &mut self.clusters[token];
        let width = flag.len_utf8();
        if offset == 0 && cluster.len() > width {
            let value = cluster[width..].to_string();
            self.clusters.remove(token);
            return value;
        }
        cluster.remove(offset);
        if cluster.is_empty() {
            self.clusters.remove(token);
        }
        flag.to_string()
    }

    /// Remove every occurrence of `flag` from all clusters, dropping clusters
    /// left empty. Returns how many were removed.
    fn strip_from_clusters(&mut self, flag: char) -> usize {
        let mut removed = 0;
        self.clusters.retain_mut(|cluster| {
            let count = cluster.matches(flag).count();
            if count > 0 {
                removed += count;
                cluster.retain(|c| c != flag);
            }
            !cluster.is_empty()
        });
        removed
    }

    /// Positional arguments in command-line order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Move the positional arguments out, leaving none behind.
    pub fn take_positionals(&mut self) -> Vec<String> {
        std::mem::take(&mut self.positionals)
    }

    pub fn into_positionals(self) -> Vec<String> {
        self.positionals
    }

    /// Whether every option has been consumed. Positionals are not counted.
    pub fn is_exhausted(&self) -> bool {
        self.long.is_empty() && self.short.is_empty() && self.clusters.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            long: self.long.clone(),
            short: self.short.clone(),
            clusters: self.clusters.clone(),
            positionals: self.positionals.clone(),
        }
    }
}
