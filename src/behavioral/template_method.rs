// Template Method: a provided trait method fixes the order of the steps,
// implementors fill in the steps themselves.

// ============================================================================
// Example: Garden (default method as the template)
// ============================================================================

pub trait Garden {
    fn prepare_soil(&self) -> String;
    fn plant_seeds(&self) -> String;
    fn water_plants(&self) -> String;

    fn prepare_garden(&self) -> Vec<String> {
        vec![self.prepare_soil(), self.plant_seeds(), self.water_plants()]
    }
}

pub struct RoseGarden;

impl RoseGarden {
    pub fn prepare(&self) -> Vec<String> {
        self.prepare_garden()
    }
}

impl Garden for RoseGarden {
    fn prepare_soil(&self) -> String {
        "prepare soil for rose garden".to_string()
    }

    fn plant_seeds(&self) -> String {
        "plant seeds for rose garden".to_string()
    }

    fn water_plants(&self) -> String {
        "water the rose garden".to_string()
    }
}

// ============================================================================
// Example: Computer (single hook)
// ============================================================================

pub trait Computer {
    fn brand_name(&self) -> &str;

    fn print_brand_name(&self) -> String {
        format!("Computer brand: {}", self.brand_name())
    }
}

pub struct Apple;

impl Computer for Apple {
    fn brand_name(&self) -> &str {
        "Apple"
    }
}

pub struct Dell;

impl Computer for Dell {
    fn brand_name(&self) -> &str {
        "Dell"
    }
}

// ============================================================================
// Example: Code generator (template delegates the phases)
// ============================================================================

pub trait GeneratorPhases {
    fn collect_source(&self) -> String;
    fn cross_compile(&self) -> String;
}

pub struct HtmlGeneratorPhases;

impl GeneratorPhases for HtmlGeneratorPhases {
    fn collect_source(&self) -> String {
        "HtmlGeneratorPhases collect_source() executed".to_string()
    }

    fn cross_compile(&self) -> String {
        "HtmlGeneratorPhases cross_compile() executed".to_string()
    }
}

pub struct JsonGeneratorPhases;

impl GeneratorPhases for JsonGeneratorPhases {
    fn collect_source(&self) -> String {
        "JsonGeneratorPhases collect_source() executed".to_string()
    }

    fn cross_compile(&self) -> String {
        "JsonGeneratorPhases cross_compile() executed".to_string()
    }
}

pub struct CodeGenerator {
    phases: Box<dyn GeneratorPhases>,
}

impl CodeGenerator {
    pub fn new(phases: Box<dyn GeneratorPhases>) -> Self {
        Self { phases }
    }

    pub fn cross_compile(&self) -> Vec<String> {
        vec![self.phases.collect_source(), self.phases.cross_compile()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rose_garden_order() {
        assert_eq!(
            RoseGarden.prepare(),
            vec![
                "prepare soil for rose garden",
                "plant seeds for rose garden",
                "water the rose garden",
            ]
        );
    }

    #[test]
    fn test_computer_brands() {
        assert_eq!(Apple.print_brand_name(), "Computer brand: Apple");
        assert_eq!(Dell.print_brand_name(), "Computer brand: Dell");
    }

    #[test]
    fn test_code_generators() {
        let html = CodeGenerator::new(Box::new(HtmlGeneratorPhases));
        let json = CodeGenerator::new(Box::new(JsonGeneratorPhases));

        assert_eq!(
            html.cross_compile(),
            vec![
                "HtmlGeneratorPhases collect_source() executed",
                "HtmlGeneratorPhases cross_compile() executed",
            ]
        );
        assert_eq!(json.cross_compile()[0], "JsonGeneratorPhases collect_source() executed");
    }
}
