use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// An owned copy of what an [`Args`](crate::Args) still holds.
///
/// Entries appear in the order they were first seen on the command line.
/// Taken after all expected options have been read, a non-empty snapshot
/// lists the options nobody asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Long options by name; flags without a value map to `""`.
    pub long: IndexMap<String, String>,
    /// Short options given an explicit value (`-c 55`, `-c=55`).
    pub short: IndexMap<char, String>,
    /// Short clusters kept whole (`-Syu` is `"Syu"`).
    pub clusters: Vec<String>,
    pub positionals: Vec<String>,
}

impl Snapshot {
    pub fn has_options(&self) -> bool {
        !(self.long.is_empty() && self.short.is_empty() && self.clusters.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_options() && self.positionals.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no arguments)");
        }
        if !self.long.is_empty() {
            writeln!(f, "long options:")?;
            for (name, value) in &self.long {
                if value.is_empty() {
                    writeln!(f, "  --{name}")?;
                } else {
                    writeln!(f, "  --{name} = {value}")?;
                }
            }
        }
        if !self.short.is_empty() {
            writeln!(f, "short options:")?;
            for (flag, value) in &self.short {
                writeln!(f, "  -{flag} = {value}")?;
            }
        }
        if !self.clusters.is_empty() {
            writeln!(f, "short clusters:")?;
            for cluster in &self.clusters {
                writeln!(f, "  -{cluster}")?;
            }
        }
        if !self.positionals.is_empty() {
            writeln!(f, "positional arguments:")?;
            for arg in &self.positionals {
                writeln!(f, "  {arg}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_renders_placeholder() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_string(), "(no arguments)\n");
    }

    #[test]
    fn renders_each_store_in_order() {
        let mut snapshot = Snapshot::default();
        snapshot.long.insert("port".to_string(), "8080".to_string());
        snapshot.long.insert("root".to_string(), String::new());
        snapshot.short.insert('c', "55".to_string());
        snapshot.clusters.push("Syu".to_string());
        snapshot.positionals.push("notes.txt".to_string());

        let expected = "\
long options:
  --port = 8080
  --root
short options:
  -c = 55
short clusters:
  -Syu
positional arguments:
  notes.txt
";
        assert_eq!(snapshot.to_string(), expected);
    }

    #[test]
    fn positionals_alone_are_not_options() {
        let snapshot = Snapshot {
            positionals: vec!["a".to_string()],
            ..Default::default()
        };
        assert!(!snapshot.has_options());
        assert!(!snapshot.is_empty());
    }
}
