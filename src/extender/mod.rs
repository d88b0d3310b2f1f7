//! The extender: one owned value tying registry, splicer and patcher to a
//! host.
//!
//! ## Lifecycle
//!
//! 1. Create a `DbExtender` with the host's symbol resolver and sprite
//!    subsystem.
//! 2. Boot content units with `boot_units`. Each registers into the
//!    extender through the `DbRegistry` contract.
//! 3. Hand the host boot plan to `run_boot`, which splices the patch phases
//!    in and runs the augmented plan against the host tables.
//! 4. Extend each locale's string table with `extend_locale_strings`.

mod locale;

use tracing::{error, info, info_span};

use crate::boot::{run_plan, BootQueue, BootSplicer, PatchPhase};
use crate::content::{
    CardMetaOverwrite, ContentUnit, ExternalArtifact, ExternalCard, ExternalCharacter,
    ExternalDeck, ExternalEnemy, ExternalMidrowItem, ExternalModifier, ExternalSpaceThing,
    ExternalSprite, ExternalStatus,
};
use crate::core::{ExtenderConfig, RegisterError, SpliceError};
use crate::host::{HostDb, SpriteCatalog, SpriteExtension, SymbolResolver, SymbolTable};
use crate::patch::{CatalogPatcher, PatchReport};
use crate::registry::{DbRegistry, RegistryState};

/// Outcome of booting a sequence of content units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootSummary {
    /// Units whose boot returned `Ok`.
    pub booted: usize,

    /// Units whose boot failed, with the error that stopped them.
    pub failed: Vec<(String, RegisterError)>,
}

impl BootSummary {
    /// Did every unit boot?
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Registry and boot splice for one host.
///
/// ## Example
///
/// ```
/// use ccg_splice::content::{ExternalDeck, ExternalSprite};
/// use ccg_splice::core::{Color, ExtenderConfig};
/// use ccg_splice::extender::DbExtender;
/// use ccg_splice::host::{SpriteCatalog, SymbolTable};
/// use ccg_splice::registry::DbRegistry;
///
/// let mut extender = DbExtender::new(
///     ExtenderConfig::default(),
///     SymbolTable::new().with_decks(10_000..10_010),
///     SpriteCatalog::new(),
/// );
///
/// let deck = ExternalDeck::new(
///     "alpha",
///     Color::from_rgb(90, 20, 160),
///     Color::from_rgb(255, 255, 255),
///     ExternalSprite::original(1),
///     ExternalSprite::original(2),
/// );
/// assert_eq!(extender.register_deck(deck, None), Ok(10_000));
/// assert_eq!(extender.registry().deck_id("alpha"), Some(10_000));
/// ```
#[derive(Debug)]
pub struct DbExtender<R = SymbolTable, S = SpriteCatalog> {
    config: ExtenderConfig,
    registry: RegistryState,
    resolver: R,
    sprites: S,
    splicer: BootSplicer,
    patcher: CatalogPatcher,
    reports: Vec<(PatchPhase, PatchReport)>,
}

impl<R: SymbolResolver, S: SpriteExtension> DbExtender<R, S> {
    /// Create an extender.
    pub fn new(config: ExtenderConfig, resolver: R, sprites: S) -> Self {
        Self {
            registry: RegistryState::from_config(&config),
            splicer: BootSplicer::from_config(&config),
            patcher: CatalogPatcher::from_config(&config),
            config,
            resolver,
            sprites,
            reports: Vec::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExtenderConfig {
        &self.config
    }

    /// Get the registered content.
    pub fn registry(&self) -> &RegistryState {
        &self.registry
    }

    /// Get the symbol resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Get the sprite subsystem.
    pub fn sprites(&self) -> &S {
        &self.sprites
    }

    /// Get the sprite subsystem for registering sprites.
    pub fn sprites_mut(&mut self) -> &mut S {
        &mut self.sprites
    }

    /// Reports of every patch phase run so far, in run order.
    pub fn reports(&self) -> &[(PatchPhase, PatchReport)] {
        &self.reports
    }

    /// Boot content units in the given order.
    ///
    /// A unit that fails is logged with its name; the remaining units still
    /// boot. Whatever a failed unit registered before failing stays.
    pub fn boot_units(&mut self, units: &mut [Box<dyn ContentUnit>]) -> BootSummary {
        let mut summary = BootSummary::default();

        for unit in units.iter_mut() {
            let span = info_span!("content_unit", unit = unit.name());
            let _enter = span.enter();

            match unit.boot(self) {
                Ok(()) => {
                    info!("content unit booted");
                    summary.booted += 1;
                }
                Err(err) => {
                    error!(%err, "content unit failed to boot");
                    summary.failed.push((unit.name().to_string(), err));
                }
            }
        }

        summary
    }

    /// Splice the patch phases into a host boot plan.
    pub fn splice(&self, plan: BootQueue) -> Result<BootQueue, SpliceError> {
        self.splicer.splice(plan)
    }

    /// Run one patch phase against the host tables.
    pub fn apply_phase(&mut self, phase: PatchPhase, db: &mut HostDb) -> PatchReport {
        let report = self.patcher.apply(
            phase,
            &mut self.registry,
            db,
            &self.resolver,
            &mut self.sprites,
        );
        self.reports.push((phase, report));
        report
    }

    /// Splice the host plan and run it.
    ///
    /// Returns the number of steps executed. A plan too short to splice is
    /// not run; the error hands it back.
    pub fn run_boot(&mut self, plan: BootQueue, db: &mut HostDb) -> Result<usize, SpliceError> {
        let spliced = self.splice(plan)?;
        let executed = run_plan(spliced, db, |phase, db| {
            self.apply_phase(phase, db);
        });

        info!(executed, "host boot plan finished");
        Ok(executed)
    }

    /// Sum of every patch report so far.
    pub fn total_report(&self) -> PatchReport {
        let mut total = PatchReport::default();
        for (_, report) in &self.reports {
            total += *report;
        }
        total
    }
}

impl<R: SymbolResolver, S: SpriteExtension> DbRegistry for DbExtender<R, S> {
    fn register_card(
        &mut self,
        card: ExternalCard,
        overwrite: Option<&str>,
    ) -> Result<(), RegisterError> {
        self.registry.register_card(card, overwrite)
    }

    fn register_deck(
        &mut self,
        deck: ExternalDeck,
        overwrite: Option<i64>,
    ) -> Result<u32, RegisterError> {
        self.registry.register_deck(deck, overwrite)
    }

    fn register_card_meta_overwrite(
        &mut self,
        meta: CardMetaOverwrite,
        card_key: &str,
    ) -> Result<(), RegisterError> {
        self.registry.register_card_meta_overwrite(meta, card_key)
    }

    fn register_character(&mut self, character: ExternalCharacter) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalCharacter::KIND, &character.global_name)
    }

    fn register_enemy(&mut self, enemy: ExternalEnemy) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalEnemy::KIND, &enemy.global_name)
    }

    fn register_artifact(&mut self, artifact: ExternalArtifact) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalArtifact::KIND, &artifact.global_name)
    }

    fn register_modifier(&mut self, modifier: ExternalModifier) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalModifier::KIND, &modifier.global_name)
    }

    fn register_midrow_item(&mut self, item: ExternalMidrowItem) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalMidrowItem::KIND, &item.global_name)
    }

    fn register_status(&mut self, status: ExternalStatus) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalStatus::KIND, &status.global_name)
    }

    fn register_space_thing(&mut self, thing: ExternalSpaceThing) -> Result<(), RegisterError> {
        self.registry
            .reject_unsupported(ExternalSpaceThing::KIND, &thing.global_name)
    }

    fn get_mod_sprite(&self, global_name: &str) -> Option<ExternalSprite> {
        self.sprites.lookup_sprite(global_name)
    }

    fn get_original_sprite(&self, id: u32) -> ExternalSprite {
        self.sprites.original_sprite(id)
    }
}
