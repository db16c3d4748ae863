//! Games and documents.

use crate::error::TreeError;
use crate::model::property::{board_size_of, game_type_of};
use crate::model::{
    BoardSize, GameInfo, GameTree, GameType, NodeId, Property, PropertyCategory, PropertyType,
    TreeBuilder,
};

/// One game: a tree of nodes with an optional root.
///
/// A game is identified by its tree's id. It is deliberately not `Clone`, so
/// the same game cannot appear twice in a [`Document`].
#[derive(Debug, Default)]
pub struct Game {
    tree: GameTree,
}

impl Game {
    /// A game without a root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game with an empty root node.
    pub fn with_root() -> Self {
        let mut tree = GameTree::new();
        tree.create_root();
        Self { tree }
    }

    pub fn id(&self) -> u32 {
        self.tree.id()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    /// Replaces the root node. The node must belong to this game's tree and
    /// have no parent.
    pub fn set_root(&mut self, root: Option<NodeId>) -> Result<(), TreeError> {
        self.tree.set_root(root)
    }

    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut GameTree {
        &mut self.tree
    }

    pub fn tree_builder(&mut self) -> TreeBuilder<'_> {
        TreeBuilder::new(&mut self.tree)
    }

    fn root_property(&self, property_type: PropertyType) -> Option<&Property> {
        let root = self.root()?;
        self.tree.property(root, property_type).ok().flatten()
    }

    /// GM of the root node; Go when absent.
    pub fn game_type(&self) -> GameType {
        game_type_of(self.root_property(PropertyType::Game))
    }

    /// SZ of the root node; the game type's default when absent.
    pub fn board_size(&self) -> BoardSize {
        board_size_of(self.root_property(PropertyType::Size), self.game_type())
    }

    /// Nodes carrying game-info properties, in preorder.
    pub fn game_info_nodes(&self) -> Vec<NodeId> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        self.tree
            .descendants(root)
            .unwrap_or_default()
            .into_iter()
            .filter(|n| {
                self.tree
                    .has_property_of_category(*n, PropertyCategory::GameInfo)
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn has_game_info(&self) -> bool {
        !self.game_info_nodes().is_empty()
    }

    /// Snapshot of the game information, from the root and the first
    /// game-info node. None without a root node.
    pub fn create_game_info(&self) -> Result<Option<GameInfo>, TreeError> {
        let Some(root) = self.root() else {
            return Ok(None);
        };
        let info_node = self.game_info_nodes().first().copied();
        GameInfo::from_nodes(&self.tree, root, info_node).map(Some)
    }

    /// Writes game information to the root and the first game-info node,
    /// creating a root node if the game has none.
    pub fn write_game_info(&mut self, info: &GameInfo) -> Result<(), TreeError> {
        let root = match self.root() {
            Some(root) => root,
            None => self.tree.create_root(),
        };
        let info_node = self.game_info_nodes().first().copied();
        info.write_to(&mut self.tree, root, info_node)
    }
}

/// An ordered collection of games.
#[derive(Debug, Default)]
pub struct Document {
    games: Vec<Game>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn game_mut(&mut self, index: usize) -> Option<&mut Game> {
        self.games.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn append_game(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Inserts before `index`; an index past the end appends.
    pub fn insert_game(&mut self, index: usize, game: Game) {
        let index = index.min(self.games.len());
        self.games.insert(index, game);
    }

    pub fn remove_game(&mut self, index: usize) -> Option<Game> {
        (index < self.games.len()).then(|| self.games.remove(index))
    }

    /// Position of the game with the given id.
    pub fn position(&self, game_id: u32) -> Option<usize> {
        self.games.iter().position(|g| g.id() == game_id)
    }

    pub fn contains(&self, game_id: u32) -> bool {
        self.position(game_id).is_some()
    }
}
