//! Locations and their ownership lists.

use tanglewood_foundation::Name;

use crate::entity::{Artefact, Character, Entity, EntityInfo, Furniture, Thing};

/// A place in the world.
///
/// A location owns four lists: the names of locations reachable from here,
/// and the characters, artefacts, and furniture present here. The storeroom
/// is an ordinary `Location` held outside the navigable registry.
#[derive(Clone, Debug)]
pub struct Location {
    info: EntityInfo,
    paths: Vec<Name>,
    characters: Vec<Character>,
    artefacts: Vec<Artefact>,
    furniture: Vec<Furniture>,
}

impl Location {
    /// Creates an empty location.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self {
            info: EntityInfo::new(name, description),
            paths: Vec::new(),
            characters: Vec::new(),
            artefacts: Vec::new(),
            furniture: Vec::new(),
        }
    }

    /// Adds a one-way path leaving this location.
    pub fn add_path(&mut self, to: Name) {
        self.paths.push(to);
    }

    /// Whether a path with the given name leaves this location.
    #[must_use]
    pub fn has_path(&self, to: &Name) -> bool {
        self.paths.contains(to)
    }

    /// Adds a character.
    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Adds an artefact.
    pub fn add_artefact(&mut self, artefact: Artefact) {
        self.artefacts.push(artefact);
    }

    /// Adds several artefacts at once (used when a player's inventory is
    /// dropped on game-over).
    pub fn add_artefacts(&mut self, artefacts: impl IntoIterator<Item = Artefact>) {
        self.artefacts.extend(artefacts);
    }

    /// Adds a furniture piece.
    pub fn add_furniture(&mut self, furniture: Furniture) {
        self.furniture.push(furniture);
    }

    /// Adds any movable object to the matching list.
    pub fn add_thing(&mut self, thing: Thing) {
        match thing {
            Thing::Artefact(a) => self.add_artefact(a),
            Thing::Furniture(f) => self.add_furniture(f),
            Thing::Character(c) => self.add_character(c),
        }
    }

    /// Whether an artefact with the given name is present.
    #[must_use]
    pub fn has_artefact(&self, name: &Name) -> bool {
        self.artefacts.iter().any(|a| a.name() == name)
    }

    /// Whether a furniture piece with the given name is present.
    #[must_use]
    pub fn has_furniture(&self, name: &Name) -> bool {
        self.furniture.iter().any(|f| f.name() == name)
    }

    /// Whether a character with the given name is present.
    #[must_use]
    pub fn has_character(&self, name: &Name) -> bool {
        self.characters.iter().any(|c| c.name() == name)
    }

    /// Whether any movable object with the given name is present.
    #[must_use]
    pub fn has_thing(&self, name: &Name) -> bool {
        self.has_artefact(name) || self.has_furniture(name) || self.has_character(name)
    }

    /// Whether the given subject is present at this location in the widest
    /// sense: the location's own name, a leaving path, or any character,
    /// artefact, or furniture piece here.
    #[must_use]
    pub fn contains(&self, name: &Name) -> bool {
        self.name() == name || self.has_path(name) || self.has_thing(name)
    }

    /// Removes and returns the named artefact, if present.
    pub fn take_artefact(&mut self, name: &Name) -> Option<Artefact> {
        let index = self.artefacts.iter().position(|a| a.name() == name)?;
        Some(self.artefacts.remove(index))
    }

    /// Removes the named object from whichever list holds it.
    ///
    /// Paths are checked first and are removed without being returned: a
    /// consumed path disappears rather than entering the storeroom. The
    /// location's own name removes nothing.
    pub fn remove_thing(&mut self, name: &Name) -> Option<Thing> {
        if let Some(index) = self.paths.iter().position(|p| p == name) {
            self.paths.remove(index);
            return None;
        }
        if let Some(index) = self.characters.iter().position(|c| c.name() == name) {
            return Some(Thing::Character(self.characters.remove(index)));
        }
        if let Some(index) = self.artefacts.iter().position(|a| a.name() == name) {
            return Some(Thing::Artefact(self.artefacts.remove(index)));
        }
        if let Some(index) = self.furniture.iter().position(|f| f.name() == name) {
            return Some(Thing::Furniture(self.furniture.remove(index)));
        }
        None
    }

    /// Paths leaving this location, in declaration order.
    #[must_use]
    pub fn paths(&self) -> &[Name] {
        &self.paths
    }

    /// Characters present, in arrival order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Artefacts present, in arrival order.
    #[must_use]
    pub fn artefacts(&self) -> &[Artefact] {
        &self.artefacts
    }

    /// Furniture present, in arrival order.
    #[must_use]
    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }
}

impl Entity for Location {
    fn info(&self) -> &EntityInfo {
        &self.info
    }
}
