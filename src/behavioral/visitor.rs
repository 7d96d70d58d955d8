// Visitor: new operations over the planets without touching the planet types.

pub trait PlanetVisitor {
    fn visit_alderaan(&mut self, planet: &PlanetAlderaan);
    fn visit_coruscant(&mut self, planet: &PlanetCoruscant);
    fn visit_tatooine(&mut self, planet: &PlanetTatooine);
    fn visit_jedah(&mut self, moon: &MoonJedah);
}

pub trait Planet {
    fn accept(&self, visitor: &mut dyn PlanetVisitor);
}

pub struct PlanetAlderaan;
pub struct PlanetCoruscant;
pub struct PlanetTatooine;
pub struct MoonJedah;

impl Planet for PlanetAlderaan {
    fn accept(&self, visitor: &mut dyn PlanetVisitor) {
        visitor.visit_alderaan(self);
    }
}

impl Planet for PlanetCoruscant {
    fn accept(&self, visitor: &mut dyn PlanetVisitor) {
        visitor.visit_coruscant(self);
    }
}

impl Planet for PlanetTatooine {
    fn accept(&self, visitor: &mut dyn PlanetVisitor) {
        visitor.visit_tatooine(self);
    }
}

impl Planet for MoonJedah {
    fn accept(&self, visitor: &mut dyn PlanetVisitor) {
        visitor.visit_jedah(self);
    }
}

#[derive(Default)]
pub struct NameVisitor {
    pub name: String,
}

impl PlanetVisitor for NameVisitor {
    fn visit_alderaan(&mut self, _planet: &PlanetAlderaan) {
        self.name = "Alderaan".to_string();
    }

    fn visit_coruscant(&mut self, _planet: &PlanetCoruscant) {
        self.name = "Coruscant".to_string();
    }

    fn visit_tatooine(&mut self, _planet: &PlanetTatooine) {
        self.name = "Tatooine".to_string();
    }

    fn visit_jedah(&mut self, _moon: &MoonJedah) {
        self.name = "Jedah".to_string();
    }
}

pub fn known_planets() -> Vec<Box<dyn Planet>> {
    vec![
        Box::new(PlanetAlderaan),
        Box::new(PlanetCoruscant),
        Box::new(PlanetTatooine),
        Box::new(MoonJedah),
    ]
}

pub fn planet_names(planets: &[Box<dyn Planet>]) -> Vec<String> {
    planets
        .iter()
        .map(|planet| {
            let mut visitor = NameVisitor::default();
            planet.accept(&mut visitor);
            visitor.name
        })
        .collect()
}
