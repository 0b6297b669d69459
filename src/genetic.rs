//! This module contains the generic evolutionary-search framework.
//!
//! The framework is independent of Sudoku: anything that implements
//! [Genome](trait.Genome.html) can be evolved by a
//! [Population](struct.Population.html). A genome knows its own fitness on a
//! scale from 0 to 1 and how to produce offspring with a mate. The population
//! repeatedly ranks its individuals, carries the fittest ones over unchanged,
//! and fills the remaining slots with children of parents drawn from the top
//! half, until a perfect individual appears or a termination condition from
//! the [EvolutionSettings](struct.EvolutionSettings.html) strikes.
//!
//! Reproduction uses fixed probabilities: each gene position is inherited
//! from the first parent with 45% probability, from the second parent with
//! 45% probability, and replaced by a random symbol (a mutation) with the
//! remaining 10%.
//!
//! As a ready-made specialization, this module contains the
//! [TextGenome](struct.TextGenome.html), which evolves strings towards a
//! fixed target:
//!
//! ```
//! use std::rc::Rc;
//! use sudoku_genetic::genetic::{
//!     EvolutionSettings,
//!     Population,
//!     SilentSink,
//!     TextGenome,
//!     TextTarget
//! };
//!
//! let target = Rc::new(
//!     TextTarget::with_alphabet("HELLO", "ABCDEFGHIJKLMNOPQRSTUVWXYZ")
//!         .unwrap());
//! let mut rng = rand::thread_rng();
//! let individuals: Vec<TextGenome> = (0..50)
//!     .map(|_| TextGenome::random(Rc::clone(&target), &mut rng))
//!     .collect();
//! let population = Population::new(individuals);
//!
//! let mut settings = EvolutionSettings::default();
//! settings.max_generations = Some(100_000);
//!
//! let outcome = population
//!     .evolve(&settings, &mut rng, &mut SilentSink)
//!     .unwrap();
//!
//! assert!(outcome.is_converged());
//! assert_eq!("HELLO", outcome.fittest().chromosome());
//! ```
//!
//! The Sudoku specialization lives in the [genome](../genome/index.html)
//! module.

use log::{debug, trace};

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// The probability below which a gene is inherited from the genome on which
/// `reproduce` is called.
pub const SELF_CUTOFF: f64 = 0.45;

/// The cumulative probability below which a gene is inherited from the mate.
/// The remainder above this cutoff, 10%, is the mutation probability.
pub const MATE_CUTOFF: f64 = 0.90;

/// The default fraction of a population that is carried over unchanged into
/// the next generation.
pub const DEFAULT_LIFT_FACTOR: f64 = 0.1;

/// The default gene alphabet of a [TextTarget]: letters, digits, and common
/// punctuation.
pub const DEFAULT_GENES: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890, \
     .-;:_!'\"*#%&/()=?@${[]}";

pub(crate) enum GeneSource {
    FromSelf,
    FromMate,
    Mutation
}

/// Draws which source the next gene is taken from, with the fixed 45/45/10
/// split.
pub(crate) fn gene_source<R: Rng>(rng: &mut R) -> GeneSource {
    let probability: f64 = rng.gen();

    if probability < SELF_CUTOFF {
        GeneSource::FromSelf
    }
    else if probability < MATE_CUTOFF {
        GeneSource::FromMate
    }
    else {
        GeneSource::Mutation
    }
}

/// An enumeration of the errors that may occur when configuring or running
/// an evolutionary search.
#[derive(Debug, Eq, PartialEq)]
pub enum EvolutionError {

    /// Indicates that an evolutionary search was requested without anything
    /// to evolve towards: an empty target string, or a grid without empty
    /// cells.
    MissingTarget,

    /// Indicates that a target string contains a symbol which is not in the
    /// gene alphabet, so no chromosome built from the alphabet could ever
    /// match it.
    UnreachableTarget,

    /// Indicates that a population size of less than 2 was specified. At
    /// least two individuals are required for parent selection.
    InvalidPopulationSize,

    /// Indicates that a lift factor outside the range `[0, 1[` was
    /// specified. A lift factor of 1 or more would leave no slots for
    /// offspring.
    InvalidLiftFactor
}

/// Syntactic sugar for `Result<V, EvolutionError>`.
pub type EvolutionResult<V> = Result<V, EvolutionError>;

/// A trait for candidate solutions that can be bred towards a target.
///
/// Implementations are immutable: reproduction creates a new genome and
/// never changes either parent.
pub trait Genome: Clone {

    /// The quality of this genome on a continuous scale from 0 to 1, where
    /// 1.0 denotes a perfect solution. A population stops evolving as soon
    /// as its fittest individual reaches 1.0.
    fn fitness(&self) -> f64;

    /// Performs sexual reproduction with the given mate and produces a new
    /// offspring genome. Each gene position is inherited from `self` with
    /// 45% probability, from `mate` with 45% probability, and mutated to a
    /// random symbol with 10% probability.
    ///
    /// Both genomes must have chromosomes of equal length; the child's
    /// chromosome has that same length.
    fn reproduce<R: Rng>(&self, mate: &Self, rng: &mut R) -> Self;
}

/// The shared, immutable context of a population of [TextGenome]s: the
/// target string to evolve towards and the alphabet from which genes are
/// drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TextTarget {
    target: Vec<char>,
    alphabet: Vec<char>
}

impl TextTarget {

    /// Creates a new text target with the [DEFAULT_GENES] alphabet.
    ///
    /// # Errors
    ///
    /// * `EvolutionError::MissingTarget` if `target` is empty.
    /// * `EvolutionError::UnreachableTarget` if `target` contains a symbol
    /// outside the default alphabet.
    pub fn new(target: &str) -> EvolutionResult<TextTarget> {
        TextTarget::with_alphabet(target, DEFAULT_GENES)
    }

    /// Creates a new text target with a caller-defined alphabet, for example
    /// to restrict the search space to upper-case letters.
    ///
    /// # Errors
    ///
    /// * `EvolutionError::MissingTarget` if `target` is empty.
    /// * `EvolutionError::UnreachableTarget` if `target` contains a symbol
    /// outside `alphabet`.
    pub fn with_alphabet(target: &str, alphabet: &str)
            -> EvolutionResult<TextTarget> {
        let target: Vec<char> = target.chars().collect();
        let alphabet: Vec<char> = alphabet.chars().collect();

        if target.is_empty() {
            return Err(EvolutionError::MissingTarget);
        }

        if target.iter().any(|c| !alphabet.contains(c)) {
            return Err(EvolutionError::UnreachableTarget);
        }

        Ok(TextTarget {
            target,
            alphabet
        })
    }

    /// The target string.
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// The number of gene positions, i.e. the length of the target string in
    /// characters.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.alphabet[rng.gen_range(0..self.alphabet.len())]
    }
}

/// A [Genome] whose chromosome is a string, scored by how many positions
/// match the shared [TextTarget].
#[derive(Clone, Debug)]
pub struct TextGenome {
    context: Rc<TextTarget>,
    chromosome: Vec<char>
}

impl TextGenome {

    /// Creates a genome with a chromosome of random symbols from the
    /// target's alphabet, matching the target's length.
    pub fn random<R: Rng>(context: Rc<TextTarget>, rng: &mut R)
            -> TextGenome {
        let chromosome = (0..context.len())
            .map(|_| context.random_symbol(rng))
            .collect();

        TextGenome {
            context,
            chromosome
        }
    }

    /// Creates a genome with the given chromosome, which must have the same
    /// length as the target string.
    pub fn new(context: Rc<TextTarget>, chromosome: &str) -> TextGenome {
        let chromosome: Vec<char> = chromosome.chars().collect();
        debug_assert_eq!(context.len(), chromosome.len());

        TextGenome {
            context,
            chromosome
        }
    }

    /// The chromosome as a string.
    pub fn chromosome(&self) -> String {
        self.chromosome.iter().collect()
    }
}

impl Genome for TextGenome {
    fn fitness(&self) -> f64 {
        let matches = self.chromosome.iter()
            .zip(self.context.target.iter())
            .filter(|(gene, target_gene)| gene == target_gene)
            .count();

        matches as f64 / self.context.len() as f64
    }

    fn reproduce<R: Rng>(&self, mate: &Self, rng: &mut R) -> TextGenome {
        debug_assert_eq!(self.chromosome.len(), mate.chromosome.len());

        let chromosome = self.chromosome.iter()
            .zip(mate.chromosome.iter())
            .map(|(&self_gene, &mate_gene)| match gene_source(rng) {
                GeneSource::FromSelf => self_gene,
                GeneSource::FromMate => mate_gene,
                GeneSource::Mutation => self.context.random_symbol(rng)
            })
            .collect();

        TextGenome {
            context: Rc::clone(&self.context),
            chromosome
        }
    }
}

/// The configuration of an evolutionary search.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EvolutionSettings {

    /// The number of individuals in the population. Used by facades that
    /// seed a population; [Population::evolve] itself takes the size from
    /// the population it is called on. Must be at least 2.
    pub population_size: usize,

    /// The fraction of the population that is carried over ("lifted") into
    /// the next generation unchanged, in the range `[0, 1[`. The number of
    /// elites is the product of this factor and the population size, rounded
    /// down.
    pub lift_factor: f64,

    /// An optional bound on the number of generations. If the search has not
    /// converged after this many generations, it stops with
    /// [EvolutionOutcome::GenerationLimit]. `None` lets the search run until
    /// convergence or cancellation, which may be forever for an
    /// unsatisfiable target.
    pub max_generations: Option<usize>
}

impl EvolutionSettings {

    /// Creates settings with the given population size, the
    /// [DEFAULT_LIFT_FACTOR], and no generation bound.
    pub fn new(population_size: usize) -> EvolutionSettings {
        EvolutionSettings {
            population_size,
            lift_factor: DEFAULT_LIFT_FACTOR,
            max_generations: None
        }
    }

    /// Checks that these settings describe a runnable search.
    ///
    /// # Errors
    ///
    /// * `EvolutionError::InvalidPopulationSize` if the population size is
    /// less than 2.
    /// * `EvolutionError::InvalidLiftFactor` if the lift factor is not in
    /// the range `[0, 1[`.
    pub fn validate(&self) -> EvolutionResult<()> {
        if self.population_size < 2 {
            Err(EvolutionError::InvalidPopulationSize)
        }
        else if !(self.lift_factor >= 0.0 && self.lift_factor < 1.0) {
            Err(EvolutionError::InvalidLiftFactor)
        }
        else {
            Ok(())
        }
    }
}

impl Default for EvolutionSettings {
    fn default() -> EvolutionSettings {
        EvolutionSettings::new(100)
    }
}

/// A trait for observers of an evolutionary search. The search invokes the
/// sink once per generation with the generation index (counted from 1) and
/// the fittest genome of that generation. How to format or where to send the
/// observation is entirely the sink's decision; the search itself never
/// prints.
///
/// It is blanket-implemented for all closures of type `FnMut(usize, &G)`, so
/// a closure can be passed wherever a sink is expected.
pub trait ProgressSink<G: Genome> {

    /// Called once per generation, before offspring for the next generation
    /// are bred.
    ///
    /// # Arguments
    ///
    /// * `generation`: The index of the current generation, counted from 1.
    /// * `fittest`: The highest-ranked genome of the current generation.
    fn on_generation(&mut self, generation: usize, fittest: &G);
}

/// A [ProgressSink] that discards all observations.
pub struct SilentSink;

impl<G: Genome> ProgressSink<G> for SilentSink {
    fn on_generation(&mut self, _: usize, _: &G) { }
}

impl<G: Genome, F: FnMut(usize, &G)> ProgressSink<G> for F {
    fn on_generation(&mut self, generation: usize, fittest: &G) {
        self(generation, fittest)
    }
}

/// A cloneable flag with which an evolutionary search can be stopped from
/// outside, for example from another thread or a signal handler. The search
/// polls the token once per generation and terminates with
/// [EvolutionOutcome::Cancelled] if it has been cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>
}

impl CancelToken {

    /// Creates a new token in the non-cancelled state.
    pub fn new() -> CancelToken {
        CancelToken {
            flag: Arc::new(AtomicBool::new(false))
        }
    }

    /// Requests cancellation. All clones of this token observe the request.
    pub fn cancel(&self) {
        self.flag.store(true, AtomicOrdering::Relaxed);
    }

    /// Indicates whether cancellation has been requested on this token or
    /// any of its clones.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(AtomicOrdering::Relaxed)
    }
}

/// The result of an evolutionary search. Every variant carries the fittest
/// genome found and the number of generations that were ranked, so a search
/// that did not converge still reports its best effort.
#[derive(Clone, Debug)]
pub enum EvolutionOutcome<G> {

    /// The search found a genome with perfect fitness.
    Converged {

        /// The genome with fitness 1.0.
        fittest: G,

        /// The number of generations up to and including the one in which
        /// the perfect genome appeared.
        generations: usize
    },

    /// The generation bound from the settings was reached before a perfect
    /// genome appeared.
    GenerationLimit {

        /// The fittest genome of the final generation.
        fittest: G,

        /// The number of generations that were ranked.
        generations: usize
    },

    /// The search was stopped through a [CancelToken].
    Cancelled {

        /// The fittest genome of the final generation.
        fittest: G,

        /// The number of generations that were ranked.
        generations: usize
    }
}

impl<G> EvolutionOutcome<G> {

    /// The fittest genome the search produced, regardless of outcome.
    pub fn fittest(&self) -> &G {
        match self {
            EvolutionOutcome::Converged { fittest, .. } => fittest,
            EvolutionOutcome::GenerationLimit { fittest, .. } => fittest,
            EvolutionOutcome::Cancelled { fittest, .. } => fittest
        }
    }

    /// Destructures this outcome into the fittest genome.
    pub fn into_fittest(self) -> G {
        match self {
            EvolutionOutcome::Converged { fittest, .. } => fittest,
            EvolutionOutcome::GenerationLimit { fittest, .. } => fittest,
            EvolutionOutcome::Cancelled { fittest, .. } => fittest
        }
    }

    /// The number of generations the search ranked.
    pub fn generations(&self) -> usize {
        match self {
            EvolutionOutcome::Converged { generations, .. } => *generations,
            EvolutionOutcome::GenerationLimit { generations, .. } =>
                *generations,
            EvolutionOutcome::Cancelled { generations, .. } => *generations
        }
    }

    /// Indicates whether the search found a genome with perfect fitness.
    pub fn is_converged(&self) -> bool {
        matches!(self, EvolutionOutcome::Converged { .. })
    }
}

/// An ordered collection of genomes which is bred generation by generation.
/// The population size stays fixed across generations; each generation
/// replaces the previous one wholesale, except for the elites that are
/// copied forward.
pub struct Population<G: Genome> {
    individuals: Vec<G>
}

impl<G: Genome> Population<G> {

    /// Creates a population from the given individuals. Their order carries
    /// no meaning; the population is ranked by fitness on every generation.
    pub fn new(individuals: Vec<G>) -> Population<G> {
        Population {
            individuals
        }
    }

    /// The number of individuals in this population.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Indicates whether this population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Gets a reference to the individuals of this population.
    pub fn individuals(&self) -> &[G] {
        &self.individuals
    }

    /// Evolves this population until its fittest genome reaches perfect
    /// fitness or the generation bound from the settings is reached. See
    /// [Population::evolve_with_cancel] for details; this method is
    /// equivalent with a token that is never cancelled.
    ///
    /// # Errors
    ///
    /// See [Population::evolve_with_cancel].
    pub fn evolve<R, S>(self, settings: &EvolutionSettings, rng: &mut R,
            sink: &mut S) -> EvolutionResult<EvolutionOutcome<G>>
    where
        R: Rng,
        S: ProgressSink<G>
    {
        self.evolve_with_cancel(settings, rng, sink, &CancelToken::new())
    }

    /// Evolves this population until a termination condition strikes. Each
    /// generation proceeds as follows:
    ///
    /// 1. All individuals are ranked by descending fitness.
    /// 2. If the fittest individual has a fitness of at least 1.0, the
    /// search terminates with [EvolutionOutcome::Converged].
    /// 3. The sink observes the generation index and the fittest individual.
    /// 4. If the token is cancelled or the generation bound is reached, the
    /// search terminates with the corresponding outcome.
    /// 5. The top `lift_factor * size` individuals (rounded down) are copied
    /// into the next generation unchanged.
    /// 6. Every remaining slot is filled with the child of two parents, each
    /// drawn uniformly at random from the top half of the ranking. Parents
    /// are drawn with replacement, so an individual can mate with itself.
    /// 7. The new generation replaces the old one entirely.
    ///
    /// Within one generation, every child is derived from two immutable
    /// parents, so step 6 could be spread over worker threads; this
    /// implementation breeds sequentially.
    ///
    /// # Errors
    ///
    /// * `EvolutionError::InvalidPopulationSize` if this population has
    /// fewer than 2 individuals, or the settings specify a population size
    /// of less than 2.
    /// * `EvolutionError::InvalidLiftFactor` if the settings specify a lift
    /// factor outside the range `[0, 1[`.
    pub fn evolve_with_cancel<R, S>(self, settings: &EvolutionSettings,
            rng: &mut R, sink: &mut S, cancel: &CancelToken)
            -> EvolutionResult<EvolutionOutcome<G>>
    where
        R: Rng,
        S: ProgressSink<G>
    {
        settings.validate()?;

        if self.individuals.len() < 2 {
            return Err(EvolutionError::InvalidPopulationSize);
        }

        let size = self.individuals.len();
        let elite_count = (settings.lift_factor * size as f64) as usize;
        let half = size / 2;

        debug!("evolving population of {} with {} elites per generation",
            size, elite_count);

        let mut individuals = self.individuals;
        let mut generation = 1;

        loop {
            let mut ranked: Vec<(f64, G)> = individuals.into_iter()
                .map(|genome| (genome.fitness(), genome))
                .collect();
            ranked.sort_by(|lhs, rhs|
                rhs.0.partial_cmp(&lhs.0).unwrap_or(Ordering::Equal));

            let best_fitness = ranked[0].0;
            trace!("generation {}: best fitness {:.5}", generation,
                best_fitness);

            if best_fitness >= 1.0 {
                debug!("converged after {} generations", generation);

                return Ok(EvolutionOutcome::Converged {
                    fittest: ranked.swap_remove(0).1,
                    generations: generation
                });
            }

            sink.on_generation(generation, &ranked[0].1);

            if cancel.is_cancelled() {
                debug!("cancelled after {} generations", generation);

                return Ok(EvolutionOutcome::Cancelled {
                    fittest: ranked.swap_remove(0).1,
                    generations: generation
                });
            }

            if let Some(limit) = settings.max_generations {
                if generation >= limit {
                    debug!("generation limit of {} reached", limit);

                    return Ok(EvolutionOutcome::GenerationLimit {
                        fittest: ranked.swap_remove(0).1,
                        generations: generation
                    });
                }
            }

            let mut next_generation: Vec<G> = ranked.iter()
                .take(elite_count)
                .map(|(_, genome)| genome.clone())
                .collect();

            while next_generation.len() < size {
                let first_parent = &ranked[rng.gen_range(0..half)].1;
                let second_parent = &ranked[rng.gen_range(0..half)].1;
                next_generation.push(first_parent.reproduce(second_parent,
                    rng));
            }

            individuals = next_generation;
            generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn uppercase_target(target: &str) -> Rc<TextTarget> {
        Rc::new(TextTarget::with_alphabet(target,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap())
    }

    #[test]
    fn empty_target_is_rejected() {
        assert_eq!(Err(EvolutionError::MissingTarget), TextTarget::new(""));
    }

    #[test]
    fn target_outside_alphabet_is_rejected() {
        assert_eq!(Err(EvolutionError::UnreachableTarget),
            TextTarget::with_alphabet("hello", "ABC"));
    }

    #[test]
    fn default_alphabet_covers_common_text() {
        assert!(TextTarget::new("Hello, World!").is_ok());
    }

    #[test]
    fn random_genome_has_target_length() {
        let target = uppercase_target("SEARCH");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let genome = TextGenome::random(Rc::clone(&target), &mut rng);

        assert_eq!(target.len(), genome.chromosome().chars().count());
    }

    #[test]
    fn fitness_is_fraction_of_matches() {
        let target = uppercase_target("ABCD");
        let perfect = TextGenome::new(Rc::clone(&target), "ABCD");
        let half = TextGenome::new(Rc::clone(&target), "ABXX");
        let nothing = TextGenome::new(target, "XXXX");

        assert_eq!(1.0, perfect.fitness());
        assert_eq!(0.5, half.fitness());
        assert_eq!(0.0, nothing.fitness());
    }

    #[test]
    fn child_has_parent_length() {
        let target = uppercase_target("LENGTH");
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let first = TextGenome::random(Rc::clone(&target), &mut rng);
        let second = TextGenome::random(target, &mut rng);

        for _ in 0..100 {
            let child = first.reproduce(&second, &mut rng);
            assert_eq!(6, child.chromosome().chars().count());
        }
    }

    #[test]
    fn reproduce_leaves_parents_untouched() {
        let target = uppercase_target("STABLE");
        let first = TextGenome::new(Rc::clone(&target), "AAAAAA");
        let second = TextGenome::new(target, "BBBBBB");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let _child = first.reproduce(&second, &mut rng);

        assert_eq!("AAAAAA", first.chromosome());
        assert_eq!("BBBBBB", second.chromosome());
    }

    #[test]
    fn settings_validation() {
        let mut settings = EvolutionSettings::default();
        assert_eq!(Ok(()), settings.validate());

        settings.population_size = 1;
        assert_eq!(Err(EvolutionError::InvalidPopulationSize),
            settings.validate());

        settings.population_size = 10;
        settings.lift_factor = 1.0;
        assert_eq!(Err(EvolutionError::InvalidLiftFactor),
            settings.validate());

        settings.lift_factor = -0.1;
        assert_eq!(Err(EvolutionError::InvalidLiftFactor),
            settings.validate());
    }

    #[test]
    fn evolve_rejects_tiny_population() {
        let target = uppercase_target("AB");
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let population =
            Population::new(vec![TextGenome::random(target, &mut rng)]);

        let result = population.evolve(&EvolutionSettings::default(),
            &mut rng, &mut SilentSink);

        assert_eq!(Err(EvolutionError::InvalidPopulationSize),
            result.map(|_| ()));
    }

    #[test]
    fn perfect_seed_converges_immediately() {
        let target = uppercase_target("DONE");
        let perfect = TextGenome::new(Rc::clone(&target), "DONE");
        let other = TextGenome::new(target, "XXXX");
        let population = Population::new(vec![other, perfect]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut generations_seen = 0;
        let mut sink = |_: usize, _: &TextGenome| generations_seen += 1;

        let outcome = population
            .evolve(&EvolutionSettings::default(), &mut rng, &mut sink)
            .unwrap();

        assert!(outcome.is_converged());
        assert_eq!(1, outcome.generations());
        assert_eq!("DONE", outcome.fittest().chromosome());

        // Convergence is decided before the sink observes a generation.
        assert_eq!(0, generations_seen);
    }

    #[test]
    fn generation_limit_reports_best_effort() {
        // A 21-character target cannot be hit by 6 random seeds and 3
        // generations of breeding.
        let target = uppercase_target("CONVERGENCEISUNLIKELY");
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let individuals: Vec<TextGenome> = (0..6)
            .map(|_| TextGenome::random(Rc::clone(&target), &mut rng))
            .collect();
        let population = Population::new(individuals);

        let mut settings = EvolutionSettings::default();
        settings.max_generations = Some(3);

        let outcome = population
            .evolve(&settings, &mut rng, &mut SilentSink)
            .unwrap();

        assert!(!outcome.is_converged());
        assert_eq!(3, outcome.generations());
        assert!(outcome.fittest().fitness() < 1.0);

        match outcome {
            EvolutionOutcome::GenerationLimit { .. } => { },
            _ => panic!("expected generation limit")
        }
    }

    #[test]
    fn cancelled_token_stops_first_generation() {
        let target = uppercase_target("NEVER");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let individuals: Vec<TextGenome> = (0..10)
            .map(|_| TextGenome::random(Rc::clone(&target), &mut rng))
            .collect();
        let population = Population::new(individuals);

        let cancel = CancelToken::new();
        cancel.clone().cancel();
        assert!(cancel.is_cancelled());

        let outcome = population
            .evolve_with_cancel(&EvolutionSettings::default(), &mut rng,
                &mut SilentSink, &cancel)
            .unwrap();

        match outcome {
            EvolutionOutcome::Cancelled { generations, .. } =>
                assert_eq!(1, generations),
            _ => panic!("expected cancellation")
        }
    }

    #[test]
    fn evolution_reaches_short_target() {
        let target = uppercase_target("GA");
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let individuals: Vec<TextGenome> = (0..30)
            .map(|_| TextGenome::random(Rc::clone(&target), &mut rng))
            .collect();
        let population = Population::new(individuals);

        let mut settings = EvolutionSettings::default();
        settings.max_generations = Some(100_000);

        let outcome = population
            .evolve(&settings, &mut rng, &mut SilentSink)
            .unwrap();

        assert!(outcome.is_converged());
        assert_eq!("GA", outcome.fittest().chromosome());
    }

    #[test]
    fn elite_fitness_never_decreases() {
        let target = uppercase_target("MONOTONIC");
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let individuals: Vec<TextGenome> = (0..40)
            .map(|_| TextGenome::random(Rc::clone(&target), &mut rng))
            .collect();
        let population = Population::new(individuals);

        let mut settings = EvolutionSettings::default();
        settings.max_generations = Some(200);

        let mut best_per_generation = Vec::new();
        let mut sink = |_: usize, fittest: &TextGenome|
            best_per_generation.push(fittest.fitness());

        population.evolve(&settings, &mut rng, &mut sink).unwrap();

        assert!(best_per_generation.windows(2).all(|w| w[0] <= w[1]));
    }
}
