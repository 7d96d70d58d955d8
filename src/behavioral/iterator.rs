// Iterator: walk a collection without knowing how it stores its items.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Novella {
    pub name: String,
}

impl Novella {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Default)]
pub struct Novellas {
    novellas: Vec<Novella>,
}

impl Novellas {
    pub fn new(novellas: Vec<Novella>) -> Self {
        Self { novellas }
    }

    pub fn iter(&self) -> NovellasIterator<'_> {
        NovellasIterator {
            current: 0,
            novellas: &self.novellas,
        }
    }
}

pub struct NovellasIterator<'a> {
    current: usize,
    novellas: &'a [Novella],
}

impl<'a> Iterator for NovellasIterator<'a> {
    type Item = &'a Novella;

    fn next(&mut self) -> Option<Self::Item> {
        let novella = self.novellas.get(self.current)?;
        self.current += 1;
        Some(novella)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.novellas.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a Novellas {
    type Item = &'a Novella;
    type IntoIter = NovellasIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The lines printed by the walkthrough: "I've read: <name>".
pub fn reading_list(novellas: &Novellas) -> Vec<String> {
    novellas
        .into_iter()
        .map(|novella| format!("I've read: {}", novella.name))
        .collect()
}
