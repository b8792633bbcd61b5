//! alien-colony demo command
//!
//! Wires an in-memory colony and walks it through a full lifecycle:
//! founding, births, a rename, a refused third birth and a deletion.

use anyhow::{bail, ensure};
use clap::Args;
use colony_adapter::InMemoryColonyRepository;
use colony_domain::AlienType;
use colony_usecase::ColonyService;
use tracing::info;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Name of the colony founder
    #[arg(long, default_value = "Vexorg")]
    pub founder: String,
}

impl DemoCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut service = ColonyService::new(InMemoryColonyRepository::new());
        let founder = self.founder.as_str();

        info!("🛸 Founding colony with {}", founder);
        service.start_colony(Some(founder), Some("Omicron"))?;

        for (child, alien_type, planet) in [
            ("Braxtarg", AlienType::Alpha, "Persei"),
            ("Proxigord", AlienType::Beta, "Omicron"),
        ] {
            service.add_alien(Some(founder), Some(child), Some(alien_type), Some(planet))?;
            info!("   ✓ {} ({}) born to {}", child, alien_type, founder);
        }

        log_profile(&service.get_alien("Proxigord")?);

        info!("✏️  Renaming Proxigord to Frank of Grimsby");
        service.update_alien("Proxigord", Some("Frank"), Some("Grimsby"))?;
        let frank = service.get_alien("Frank")?;
        ensure!(frank.contains(founder), "Frank lost track of their parent");
        log_profile(&frank);

        match service.get_alien("Proxigord") {
            Ok(_) => bail!("Proxigord is still reachable after the rename"),
            Err(e) => info!("   ✓ {}", e),
        }

        info!("👶 Asking {} for a third child", founder);
        match service.add_alien(Some(founder), Some("Zib"), Some(AlienType::Gamma), None) {
            Ok(_) => bail!("{} was allowed a third child", founder),
            Err(e) => info!("   ✓ Refused: {}", e),
        }

        info!("🗑️  Deleting Braxtarg");
        service.delete_alien("Braxtarg")?;
        log_profile(&service.get_alien(founder)?);

        info!("🛸 Demo complete!");
        Ok(())
    }
}

fn log_profile(profile: &str) {
    for line in profile.lines() {
        info!("   {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_runs() {
        let cmd = DemoCommand {
            founder: "Vexorg".to_string(),
        };
        assert!(cmd.run().is_ok());
    }

    #[test]
    fn test_demo_rejects_invalid_founder() {
        let cmd = DemoCommand {
            founder: "x".repeat(51),
        };
        assert!(cmd.run().is_err());
    }
}
