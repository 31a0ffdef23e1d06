use serde::Serialize;
use tracing::{debug, info};

use super::store::CoactorGraph;
use crate::api::MovieApi;
use crate::constants::crawl::{
    CAST_LIMIT, END_DATE, EXPANSION_ROUNDS, SEED_ID, SEED_NAME, START_DATE,
};
use crate::progress::ProgressReporter;

/// What to crawl: the seed actor, the release window and how far to expand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPlan {
    pub seed_id: String,
    pub seed_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Cast members taken per movie (billing order `0..cast_limit`)
    pub cast_limit: usize,
    /// Expansion rounds after the base phase
    pub expansion_rounds: usize,
}

impl Default for CrawlPlan {
    fn default() -> Self {
        Self {
            seed_id: SEED_ID.to_string(),
            seed_name: SEED_NAME.to_string(),
            start_date: Some(START_DATE.to_string()),
            end_date: Some(END_DATE.to_string()),
            cast_limit: CAST_LIMIT,
            expansion_rounds: EXPANSION_ROUNDS,
        }
    }
}

/// Outcome of a crawl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// New nodes per phase: the base phase first, then each expansion round
    pub nodes_added_per_phase: Vec<usize>,
    pub api_calls: usize,
}

/// Builds a co-actor graph by breadth-first expansion over an API
///
/// The base phase links the seed to the top-billed cast of each of its
/// movies in the window. Each expansion round repeats the lookup for every
/// actor added in the previous phase. The round count is fixed, so the
/// graph may stop short of saturation.
pub struct CoactorGraphBuilder<'a, A: MovieApi + ?Sized> {
    api: &'a A,
    plan: CrawlPlan,
    graph: CoactorGraph,
    api_calls: usize,
}

impl<'a, A: MovieApi + ?Sized> CoactorGraphBuilder<'a, A> {
    pub fn new(api: &'a A, plan: CrawlPlan) -> Self {
        Self {
            api,
            plan,
            graph: CoactorGraph::new(),
            api_calls: 0,
        }
    }

    pub fn plan(&self) -> &CrawlPlan {
        &self.plan
    }

    pub fn graph(&self) -> &CoactorGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CoactorGraph {
        self.graph
    }

    /// Run the base phase and every expansion round
    pub fn build(&mut self, mut progress: Option<&mut ProgressReporter>) -> BuildSummary {
        let seed_id = self.plan.seed_id.clone();
        self.graph.add_node(&seed_id, &self.plan.seed_name);

        let mut phases = Vec::with_capacity(self.plan.expansion_rounds + 1);
        let mut frontier =
            self.run_phase("Base graph", &[seed_id], progress.as_deref_mut());
        phases.push(frontier.len());

        for round in 1..=self.plan.expansion_rounds {
            let label = format!("Expansion round {round}");
            frontier = self.run_phase(&label, &frontier, progress.as_deref_mut());
            phases.push(frontier.len());
        }

        info!(
            nodes = self.graph.total_nodes(),
            edges = self.graph.total_edges(),
            api_calls = self.api_calls,
            "co-actor graph built"
        );

        BuildSummary {
            nodes_added_per_phase: phases,
            api_calls: self.api_calls,
        }
    }

    /// Expand every actor in `frontier`, returning the ids added to the graph
    fn run_phase(
        &mut self,
        label: &str,
        frontier: &[String],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Vec<String> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_phase(label, frontier.len());
        }

        let mut added = Vec::new();
        for actor_id in frontier {
            if let Some(p) = progress.as_deref() {
                p.expanding_actor(actor_id);
            }
            self.expand_actor(actor_id, &mut added);
            if let Some(p) = progress.as_deref() {
                p.actor_done();
            }
        }

        info!(phase = label, frontier = frontier.len(), added = added.len(), "phase complete");
        if let Some(p) = progress.as_deref_mut() {
            p.finish_phase(label, added.len());
        }

        added
    }

    /// Link `actor_id` to the top-billed cast of each of its movies
    fn expand_actor(&mut self, actor_id: &str, added: &mut Vec<String>) {
        let credits = self.api.get_movie_credits_for_person(
            actor_id,
            self.plan.start_date.as_deref(),
            self.plan.end_date.as_deref(),
        );
        self.api_calls += 1;
        debug!(actor_id, credits = credits.len(), "fetched credits");

        let exclude = [actor_id.to_string()];
        for credit in credits {
            let Some(movie_id) = credit.id else {
                continue;
            };

            let cast = self
                .api
                .get_movie_cast(&movie_id, self.plan.cast_limit, &exclude);
            self.api_calls += 1;

            for member in cast {
                let Some(member_id) = member.id else {
                    continue;
                };

                if self
                    .graph
                    .add_node(&member_id, member.name.as_deref().unwrap_or_default())
                {
                    added.push(member_id.clone());
                }
                self.graph.add_edge(actor_id, &member_id);
            }
        }
    }
}
