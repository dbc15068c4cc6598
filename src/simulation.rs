//! The tips simulation: generated data plus repeated searches over it.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::generator::DataGenerator;
use crate::landscape::Landscape;
use crate::loss::Params;
use crate::random::make_rng;
use crate::search::{NaiveSearch, SearchResult};

/// Generated dataset together with a dedicated search stream.
///
/// The data is drawn from a stream seeded with the generator's seed. The
/// search stream is forked from it after generation, so searches never read
/// the data stream and successive [`run`](Self::run) calls continue the same
/// deterministic sequence.
///
/// # Examples
///
/// ```
/// use sse_landscape::{DataGenerator, NaiveSearch, TipsSimulation};
///
/// let mut sim = TipsSimulation::new(DataGenerator::builder().seed(42).build().unwrap()).unwrap();
/// let search = NaiveSearch::builder().n_samples(1000).build().unwrap();
///
/// let result = sim.run(&search);
/// assert_eq!(result.trajectory.len(), 1001);
/// ```
#[derive(Debug)]
pub struct TipsSimulation {
    generator: DataGenerator,
    dataset: Dataset,
    search_rng: fastrand::Rng,
}

impl TipsSimulation {
    /// Generate the dataset and set up the search stream.
    ///
    /// # Errors
    ///
    /// Returns any error from [`DataGenerator::generate_with`].
    pub fn new(generator: DataGenerator) -> Result<Self> {
        let mut rng = make_rng(Some(generator.seed()));
        let dataset = generator.generate_with(&mut rng)?;
        let search_rng = rng.fork();
        Ok(Self {
            generator,
            dataset,
            search_rng,
        })
    }

    /// The generated data.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The parameters the data was generated from.
    #[must_use]
    pub fn truth(&self) -> Params {
        self.generator.truth()
    }

    /// Run `search` on the generated data using the simulation's search stream.
    ///
    /// The search's own seed is ignored here.
    #[must_use]
    pub fn run(&mut self, search: &NaiveSearch) -> SearchResult {
        search.run_with(&self.dataset, &mut self.search_rng)
    }

    /// Run `search` on another dataset (e.g. a standardized copy) with the
    /// simulation's search stream.
    #[must_use]
    pub fn run_on(&mut self, search: &NaiveSearch, dataset: &Dataset) -> SearchResult {
        search.run_with(dataset, &mut self.search_rng)
    }

    /// Build a landscape over the generated data with the true parameters attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroVariance`](crate::Error::ZeroVariance) when
    /// standardizing data without spread.
    pub fn landscape(&self, standardize: bool) -> Result<Landscape> {
        Landscape::builder(
            self.dataset.features().to_vec(),
            self.dataset.targets().to_vec(),
        )
        .truth(self.generator.truth())
        .standardize(standardize)
        .build()
    }
}
