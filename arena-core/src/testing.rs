//! Explicit game trees for exercising the search engine

use std::rc::Rc;

use rand::Rng;

use crate::game::{GameState, Player};

#[derive(Clone, Debug)]
pub struct Node {
    pub children: Vec<usize>,
    /// Heuristic value from `Player::First`'s point of view
    pub value: f32,
    pub finished: bool,
    pub winner: Option<Player>,
}

/// A game played by walking down a fixed tree. `First` moves at the root and
/// turns alternate every ply. Actions are child slots.
#[derive(Clone, Debug)]
pub struct TreeGame {
    nodes: Rc<Vec<Node>>,
    current: usize,
    to_move: Player,
}

impl TreeGame {
    pub fn node(&self) -> usize {
        self.current
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn possible_actions(&self) -> Vec<usize> {
        let node = &self.nodes[self.current];
        if node.finished {
            Vec::new()
        } else {
            (0..node.children.len()).collect()
        }
    }

    fn validate_action(&self, action: &usize) -> bool {
        let node = &self.nodes[self.current];
        !node.finished && *action < node.children.len()
    }

    fn update(&mut self, action: usize) {
        self.current = self.nodes[self.current].children[action];
        self.to_move = self.to_move.opponent();
    }

    fn is_finished(&self) -> bool {
        self.nodes[self.current].finished
    }

    fn acting_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        self.nodes[self.current].winner
    }

    fn result(&self, player: Player) -> f64 {
        match self.winner() {
            Some(w) if w == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn no_action() -> usize {
        usize::MAX
    }
}

/// Reads the stored heuristic value, flipped for `Player::Second`
pub fn tree_eval(state: &TreeGame, perspective: Player) -> f32 {
    let v = state.nodes[state.current].value;
    match perspective {
        Player::First => v,
        Player::Second => -v,
    }
}

#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Non-terminal node with no children below the search horizon
    pub fn leaf(&mut self, value: f32) -> usize {
        self.branch_valued(&[], value)
    }

    pub fn win(&mut self, winner: Player) -> usize {
        self.push(Node {
            children: Vec::new(),
            value: 0.0,
            finished: true,
            winner: Some(winner),
        })
    }

    pub fn draw(&mut self) -> usize {
        self.push(Node {
            children: Vec::new(),
            value: 0.0,
            finished: true,
            winner: None,
        })
    }

    pub fn branch(&mut self, children: &[usize]) -> usize {
        self.branch_valued(children, 0.0)
    }

    pub fn branch_valued(&mut self, children: &[usize], value: f32) -> usize {
        self.push(Node {
            children: children.to_vec(),
            value,
            finished: false,
            winner: None,
        })
    }

    pub fn build(self, root: usize) -> TreeGame {
        TreeGame {
            nodes: Rc::new(self.nodes),
            current: root,
            to_move: Player::First,
        }
    }
}

/// Random tree with terminal nodes sprinkled in. With `integer_values` the
/// heuristic values collide often, which exercises tie-breaking.
pub fn random_tree<R: Rng>(rng: &mut R, depth: u32, branching: usize, integer_values: bool) -> TreeGame {
    let mut builder = TreeBuilder::new();
    let root = grow(&mut builder, rng, depth, branching, integer_values);
    builder.build(root)
}

fn grow<R: Rng>(
    builder: &mut TreeBuilder,
    rng: &mut R,
    depth: u32,
    branching: usize,
    integer_values: bool,
) -> usize {
    let value = if integer_values {
        rng.gen_range(-3..=3) as f32
    } else {
        rng.gen_range(-100.0f32..100.0)
    };

    if depth == 0 {
        return builder.leaf(value);
    }

    let roll: f32 = rng.gen();
    if roll < 0.08 {
        return builder.win(Player::First);
    }
    if roll < 0.16 {
        return builder.win(Player::Second);
    }
    if roll < 0.20 {
        return builder.draw();
    }

    let count = rng.gen_range(1..=branching);
    let children: Vec<usize> = (0..count)
        .map(|_| grow(builder, rng, depth - 1, branching, integer_values))
        .collect();
    builder.branch_valued(&children, value)
}
