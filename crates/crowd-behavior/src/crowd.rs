//! The pedestrian step algorithm.
//!
//! Each tick an agent tries, in order:
//!
//! 1. **Arrival**: standing on its destination ends the walk.
//! 2. **Goal seeking** (nobody within personal space) or **repulsion**
//!    (somebody is): pick one neighbouring cell.
//! 3. **Wall escape**: if step 2 found nothing, step to the open neighbour
//!    farthest from any obstacle that it has not visited recently.
//! 4. Otherwise stay put.
//!
//! A candidate cell is *open* when it is inside the grid and holds neither
//! an agent nor an obstacle at the start of the tick.  Rejecting a closed
//! cell is an ordinary branch, not an error.

use crowd_agent::{Agent, MoveStrategy};
use crowd_core::{Direction, GridPos};
use crowd_grid::Destination;

use crate::{Behavior, Intent, StepContext};

/// Score added to a repulsion candidate the agent entered recently.
pub const REVISIT_PENALTY: f64 = 100.0;

/// The default movement rule.
#[derive(Clone, Debug, Default)]
pub struct CrowdBehavior {
    edge_row_heuristic: bool,
}

impl CrowdBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the last-row rule: an agent on the grid's last row whose
    /// destination lies on another row walks toward the horizontal midline
    /// instead of toward its destination.
    ///
    /// Off by default, a deliberate change from the fixed-row rule this
    /// generalizes.
    pub fn with_edge_row_heuristic(mut self, enabled: bool) -> Self {
        self.edge_row_heuristic = enabled;
        self
    }

    pub fn edge_row_heuristic(&self) -> bool {
        self.edge_row_heuristic
    }

    // ── Intruders ─────────────────────────────────────────────────────────

    /// Positions of every other live agent within `agent`'s personal space.
    pub fn intruders(&self, agent: &Agent, ctx: &StepContext<'_>) -> Vec<GridPos> {
        ctx.agents
            .iter()
            .filter(|&&(id, pos)| id != agent.id && agent.is_intruded_by(pos))
            .map(|&(_, pos)| pos)
            .collect()
    }

    // ── Goal seeking ──────────────────────────────────────────────────────

    /// Candidate cells toward `dest`, most preferred first.
    pub fn goal_candidates(&self, pos: GridPos, dest: GridPos, ctx: &StepContext<'_>) -> Vec<GridPos> {
        let last_row = ctx.grid.height() - 1;
        if self.edge_row_heuristic && pos.y == last_row && dest.y != last_row {
            let midline = ctx.grid.width() / 2;
            let dir = if pos.x < midline { Direction::Right } else { Direction::Left };
            return vec![pos.step(dir)];
        }

        let toward_x = if dest.x < pos.x { Direction::Left } else { Direction::Right };
        match dest.y.cmp(&pos.y) {
            std::cmp::Ordering::Equal => vec![pos.step(toward_x)],
            ord => {
                let forward = if ord.is_gt() { Direction::Up } else { Direction::Down };
                let away_x = if toward_x == Direction::Left { Direction::Right } else { Direction::Left };
                vec![pos.step(forward), pos.step(toward_x), pos.step(away_x)]
            }
        }
    }

    /// First open goal candidate, if any.
    pub fn goal_seek(&self, agent: &Agent, dest: &Destination, ctx: &StepContext<'_>) -> Option<GridPos> {
        self.goal_candidates(agent.pos, dest.pos, ctx)
            .into_iter()
            .find(|&c| ctx.is_open(c))
    }

    // ── Repulsion ─────────────────────────────────────────────────────────

    /// Repulsion score of stepping into `candidate`; lower is better.
    ///
    /// Every intruder closer than the personal-space radius contributes
    /// `1 / normalized`, where `normalized = (radius - d) / radius` clamped
    /// to `[0, 1]`.  Remembered cells add [`REVISIT_PENALTY`].
    pub fn repulsion_score(&self, agent: &Agent, candidate: GridPos, intruders: &[GridPos]) -> f64 {
        let radius = agent.personal_space_radius();
        let mut score: f64 = intruders
            .iter()
            .map(|&other| candidate.distance(other))
            .filter(|&d| d > 0.0)
            .map(|d| ((radius - d) / radius).clamp(0.0, 1.0))
            .filter(|&normalized| normalized > 0.0)
            .map(|normalized| 1.0 / normalized)
            .sum();
        if agent.recent.contains(candidate) {
            score += REVISIT_PENALTY;
        }
        score
    }

    /// Least-repelled open neighbour.  Ties go to the earlier direction in
    /// [`Direction::REPULSION_ORDER`].
    pub fn repulse(&self, agent: &Agent, intruders: &[GridPos], ctx: &StepContext<'_>) -> Option<GridPos> {
        let mut best: Option<(GridPos, f64)> = None;
        for dir in Direction::REPULSION_ORDER {
            let candidate = agent.pos.step(dir);
            if !ctx.is_open(candidate) {
                continue;
            }
            let score = self.repulsion_score(agent, candidate, intruders);
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((candidate, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    // ── Wall escape ───────────────────────────────────────────────────────

    /// Open neighbour farthest from any obstacle that is not in recent
    /// memory.  Equal distances keep [`Direction::ESCAPE_ORDER`].
    pub fn escape(&self, agent: &Agent, ctx: &StepContext<'_>) -> Option<GridPos> {
        let mut ranked: Vec<(GridPos, f64)> = Direction::ESCAPE_ORDER
            .iter()
            .map(|&dir| agent.pos.step(dir))
            .filter(|&c| ctx.is_open(c))
            .map(|c| (c, ctx.obstacles.distance_to_nearest(c)))
            .collect();
        // Stable sort: equal distances stay in evaluation order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .map(|(c, _)| c)
            .find(|&c| !agent.recent.contains(c))
    }
}

impl Behavior for CrowdBehavior {
    fn decide(&self, agent: &Agent, ctx: &StepContext<'_>) -> Intent {
        let Some(dest) = ctx.destination(agent.destination) else {
            return Intent::Stay;
        };
        if agent.reached_destination || dest.is_reached_from(agent.pos) {
            return Intent::Arrive { exit: dest.preset.is_exit() };
        }

        let intruders = self.intruders(agent, ctx);
        let primary = if intruders.is_empty() {
            self.goal_seek(agent, dest, ctx)
                .map(|target| (target, MoveStrategy::GoalSeek))
        } else {
            self.repulse(agent, &intruders, ctx)
                .map(|target| (target, MoveStrategy::Repulsion))
        };

        match primary.or_else(|| self.escape(agent, ctx).map(|target| (target, MoveStrategy::Escape))) {
            Some((target, strategy)) => Intent::MoveTo { target, strategy },
            None => Intent::Stay,
        }
    }
}
