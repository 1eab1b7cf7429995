use super::{ProfileError, VehicleProfile};
use std::path::{Path, PathBuf};

/// Source of named vehicle profiles, consulted at startup and on every reset.
pub trait ProfileSource: Send + Sync {
    fn load(&self, name: &str) -> Result<VehicleProfile, ProfileError>;
}

/// Loads `<dir>/<name>.toml` profiles from a directory.
#[derive(Debug, Clone)]
pub struct TomlProfileLoader {
    dir: PathBuf,
}

impl TomlProfileLoader {
    const EXTENSION: &'static str = "toml";

    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(name).with_extension(Self::EXTENSION)
    }

    /// Names of all profiles in the directory, sorted.
    pub fn available(&self) -> Result<Vec<String>, ProfileError> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == Self::EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl ProfileSource for TomlProfileLoader {
    fn load(&self, name: &str) -> Result<VehicleProfile, ProfileError> {
        let plain_name = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain_name {
            return Err(ProfileError::Invalid(format!("'{name}' is not a valid profile name")));
        }
        let path = self.profile_path(name);
        if !path.is_file() {
            return Err(ProfileError::NotFound { name: name.to_string(), path });
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LEO: &str = r#"
initial_mass_kg = 550000.0
fuel_mass_kg = 480000.0
stage1_dry_mass_kg = 25000.0
stage1_thrust_n = 9.0e6
stage2_thrust_n = 1.8e6
stage1_burn_rate_kg_s = 2800.0
stage2_burn_rate_kg_s = 450.0
stage_separation_altitude_m = 70000.0
target_altitude_km = 400.0
target_speed_kmh = 8500.0
"#;

    fn loader_with(files: &[(&str, &str)]) -> (TempDir, TomlProfileLoader) {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        let loader = TomlProfileLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn test_loads_profile_with_default_odds() {
        let (_dir, loader) = loader_with(&[("leo.toml", LEO)]);
        let profile = loader.load("leo").unwrap();
        assert!((profile.stage1_thrust_n - 9.0e6).abs() < f64::EPSILON);
        let (config, odds) = profile.into_parts().unwrap();
        assert!((config.dry_mass_kg() - 70_000.0).abs() < 1e-9);
        assert!((odds.pre_launch() - 0.006).abs() < f64::EPSILON);
        assert!((odds.flameout() - 0.001).abs() < f64::EPSILON);
        assert!((odds.fuel_leak() - 0.005).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loads_explicit_failure_odds() {
        let contents = format!("{LEO}\n[failure_odds]\npre_launch = 1.0\nflameout = 0.0\n");
        let (_dir, loader) = loader_with(&[("certain.toml", &contents)]);
        let (_, odds) = loader.load("certain").unwrap().into_parts().unwrap();
        assert!((odds.pre_launch() - 1.0).abs() < f64::EPSILON);
        assert!(odds.flameout().abs() < f64::EPSILON);
        assert!((odds.fuel_leak() - 0.005).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let (_dir, loader) = loader_with(&[]);
        assert!(matches!(loader.load("gto"), Err(ProfileError::NotFound { .. })));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let (_dir, loader) = loader_with(&[("leo.toml", LEO)]);
        assert!(matches!(loader.load("../leo"), Err(ProfileError::Invalid(_))));
        assert!(matches!(loader.load(""), Err(ProfileError::Invalid(_))));
    }

    #[test]
    fn test_missing_key_is_a_parse_error() {
        let broken = LEO.replace("stage2_thrust_n = 1.8e6\n", "");
        let (_dir, loader) = loader_with(&[("broken.toml", &broken)]);
        assert!(matches!(loader.load("broken"), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_non_numeric_value_is_a_parse_error() {
        let broken = LEO.replace("fuel_mass_kg = 480000.0", "fuel_mass_kg = \"lots\"");
        let (_dir, loader) = loader_with(&[("broken.toml", &broken)]);
        assert!(matches!(loader.load("broken"), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_fuel_heavier_than_vehicle_is_invalid() {
        let broken = LEO.replace("fuel_mass_kg = 480000.0", "fuel_mass_kg = 600000.0");
        let (_dir, loader) = loader_with(&[("heavy.toml", &broken)]);
        let res = loader.load("heavy").unwrap().into_parts();
        assert!(matches!(res, Err(ProfileError::Invalid(_))));
    }

    #[test]
    fn test_odds_outside_unit_interval_are_invalid() {
        let contents = format!("{LEO}\n[failure_odds]\nfuel_leak = 1.5\n");
        let (_dir, loader) = loader_with(&[("odd.toml", &contents)]);
        let res = loader.load("odd").unwrap().into_parts();
        assert!(matches!(res, Err(ProfileError::Invalid(_))));
    }

    #[test]
    fn test_lists_available_profiles() {
        let (_dir, loader) =
            loader_with(&[("leo.toml", LEO), ("gto.toml", LEO), ("notes.txt", "ignored")]);
        assert_eq!(loader.available().unwrap(), vec!["gto", "leo"]);
    }

    #[test]
    fn test_shipped_profiles_are_valid() {
        let loader = TomlProfileLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles"));
        let names = loader.available().unwrap();
        assert!(names.contains(&"leo".to_string()));
        for name in names {
            let profile = loader.load(&name).unwrap();
            assert!(profile.into_parts().is_ok(), "{name}");
        }
    }
}
