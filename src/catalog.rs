// Bilingual index of every pattern in the crate.
// Drives the headings printed by the walkthrough binaries and the `catalog` bin.

use colored::Colorize;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Behavioral,
        Category::Creational,
        Category::Structural,
    ];

    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Behavioral, Locale::En) => "Behavioral",
            (Category::Creational, Locale::En) => "Creational",
            (Category::Structural, Locale::En) => "Structural",
            (Category::Behavioral, Locale::Zh) => "行为型模式",
            (Category::Creational, Locale::Zh) => "创建型模式",
            (Category::Structural, Locale::Zh) => "结构型模式",
        }
    }

    pub fn description(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Behavioral, Locale::En) => {
                "Behavioral design patterns identify common communication patterns between \
                 objects and realize these patterns, increasing flexibility in carrying out \
                 this communication."
            }
            (Category::Creational, Locale::En) => {
                "Creational design patterns deal with object creation mechanisms, trying to \
                 create objects in a manner suitable to the situation."
            }
            (Category::Structural, Locale::En) => {
                "Structural design patterns ease the design by identifying a simple way to \
                 realize relationships between entities."
            }
            (Category::Behavioral, Locale::Zh) => {
                "行为型模式用来识别对象之间的常用交流模式并加以实现，可在进行这些交流活动时增强弹性。"
            }
            (Category::Creational, Locale::Zh) => {
                "创建型模式处理对象的创建机制，设法以适合当前情况的方式来创建对象。"
            }
            (Category::Structural, Locale::Zh) => {
                "结构型模式借由一以贯之的方式来了解元件间的关系，以简化设计。"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    pub slug: &'static str,
    pub category: Category,
    pub emoji: &'static str,
    pub title_en: &'static str,
    pub title_zh: &'static str,
    pub summary_en: &'static str,
    pub summary_zh: &'static str,
}

impl PatternInfo {
    pub fn title(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.title_en,
            Locale::Zh => self.title_zh,
        }
    }

    pub fn summary(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.summary_en,
            Locale::Zh => self.summary_zh,
        }
    }

    pub fn heading(&self, locale: Locale) -> String {
        format!("{} {}", self.emoji, self.title(locale))
    }

    /// `=== <emoji> <title> ===`, the section marker in the walkthroughs.
    pub fn heading_line(&self, locale: Locale) -> String {
        format!("=== {} ===", self.heading(locale))
    }

    /// Bold heading line over a dimmed summary.
    pub fn banner(&self, locale: Locale) -> String {
        format!(
            "{}\n{}",
            self.heading_line(locale).bold(),
            self.summary(locale).dimmed()
        )
    }
}

const fn entry(
    slug: &'static str,
    category: Category,
    emoji: &'static str,
    title_en: &'static str,
    title_zh: &'static str,
    summary_en: &'static str,
    summary_zh: &'static str,
) -> PatternInfo {
    PatternInfo {
        slug,
        category,
        emoji,
        title_en,
        title_zh,
        summary_en,
        summary_zh,
    }
}

static PATTERNS: [PatternInfo; 25] = [
    // Behavioral
    entry(
        "chain-of-responsibility",
        Category::Behavioral,
        "🐝",
        "Chain Of Responsibility",
        "责任链",
        "Processes varied requests, each of which may be dealt with by a different handler.",
        "每一个处理对象决定它能处理哪些请求，并把不能处理的请求传递给链中的下一个处理对象。",
    ),
    entry(
        "command",
        Category::Behavioral,
        "👫",
        "Command",
        "命令",
        "Expresses a request, including the call to be made and all of its required \
         parameters, in a command object that may be executed immediately or held for later use.",
        "以对象来代表实际行动，命令对象把行动及其参数封装起来，可以立即执行或留待以后执行。",
    ),
    entry(
        "interpreter",
        Category::Behavioral,
        "🎶",
        "Interpreter",
        "解释器",
        "Evaluates sentences in a language.",
        "给定一种语言，定义它的文法表示，并定义一个解释器来解释语言中的句子。",
    ),
    entry(
        "iterator",
        Category::Behavioral,
        "🍫",
        "Iterator",
        "迭代器",
        "Provides a standard interface for traversing a collection of items without \
         exposing its underlying structure.",
        "让用户通过特定的接口巡访容器中的每一个元素而不用了解底层的实现。",
    ),
    entry(
        "mediator",
        Category::Behavioral,
        "💐",
        "Mediator",
        "中介者",
        "Reduces coupling between classes that communicate with each other by routing \
         their messages through a mediator object.",
        "用一个中介者对象封装一系列的对象交互，使各对象不需要显式地相互引用，从而使耦合松散。",
    ),
    entry(
        "memento",
        Category::Behavioral,
        "💾",
        "Memento",
        "备忘录",
        "Captures the current state of an object so it can be restored later without \
         breaking encapsulation.",
        "在不破坏封装性的前提下，捕获一个对象的内部状态，并在该对象之外保存这个状态，以便日后恢复。",
    ),
    entry(
        "observer",
        Category::Behavioral,
        "👓",
        "Observer",
        "观察者",
        "Allows an object to publish changes to its state; subscribers are notified \
         immediately of any change.",
        "一个目标对象管理所有相依于它的观察者对象，并且在它本身的状态改变时主动发出通知。",
    ),
    entry(
        "state",
        Category::Behavioral,
        "🐉",
        "State",
        "状态",
        "Alters the behaviour of an object as its internal state changes.",
        "对象的行为基于它的内部状态而改变，看起来就像在运行时改变了类。",
    ),
    entry(
        "strategy",
        Category::Behavioral,
        "💡",
        "Strategy",
        "策略",
        "Creates an interchangeable family of algorithms from which the required one is \
         chosen at run-time.",
        "定义一族算法并分别封装，使它们可以互相替换，在运行时选择所需的算法。",
    ),
    entry(
        "template-method",
        Category::Behavioral,
        "📝",
        "Template Method",
        "模板方法",
        "Defines the steps of an algorithm and allows the redefinition of one or more of \
         these steps while protecting the order of execution.",
        "在协议中定义算法的框架，允许具体实现在不修改结构的情况下重写算法的特定步骤。",
    ),
    entry(
        "visitor",
        Category::Behavioral,
        "🏃",
        "Visitor",
        "访问者",
        "Separates a set of structured data classes from the functionality that may be \
         performed upon the data they hold.",
        "封装作用于某种数据结构中各元素的操作，在不改变数据结构的前提下定义新的操作。",
    ),
    // Creational
    entry(
        "abstract-factory",
        Category::Creational,
        "🌰",
        "Abstract Factory",
        "抽象工厂",
        "Provides a client with a set of related or dependant objects; the family created \
         is determined at run-time.",
        "将一组具有同一主题的单独工厂封装起来，客户端通过抽象接口创建这一主题的具体对象。",
    ),
    entry(
        "builder",
        Category::Creational,
        "👷",
        "Builder",
        "生成器",
        "Creates complex objects whose constituent parts must be assembled in a specific \
         order, with the construction controlled from outside.",
        "将复杂对象的建造过程抽象出来，使这个抽象过程的不同实现可以构造出不同表现的对象。",
    ),
    entry(
        "factory-method",
        Category::Creational,
        "🏭",
        "Factory Method",
        "工厂方法",
        "Replaces constructors so that the concrete type created is decided at run-time.",
        "以工厂方法代替构造器，由运行时决定创建哪一种具体类型。",
    ),
    entry(
        "monostate",
        Category::Creational,
        "🔂",
        "Monostate",
        "单态",
        "Achieves singularity by sharing state between all instances instead of \
         restricting construction.",
        "不限制构造方法，而是让所有实例共享静态状态，从而实现单一共享特性。",
    ),
    entry(
        "prototype",
        Category::Creational,
        "🃏",
        "Prototype",
        "原型",
        "Instantiates a new object by copying the properties of an existing one, creating \
         an independent clone.",
        "通过复制一个已经存在的实例来返回新的实例，而不是新建实例。",
    ),
    entry(
        "singleton",
        Category::Creational,
        "💍",
        "Singleton",
        "单例",
        "Ensures only one object of a type is ever created; every reference refers to the \
         same instance.",
        "保证一个类型只有一个实例，所有引用都指向同一个实例。",
    ),
    // Structural
    entry(
        "adapter",
        Category::Structural,
        "🔌",
        "Adapter",
        "适配器",
        "Links two otherwise incompatible types by wrapping the adaptee with a type that \
         supports the interface the client requires.",
        "将一个类型的接口转接成用户所期待的接口，使因接口不兼容而不能一起工作的类型可以一起工作。",
    ),
    entry(
        "bridge",
        Category::Structural,
        "🌉",
        "Bridge",
        "桥接",
        "Separates an abstraction from its implementation so the two can vary independently.",
        "将抽象部分与实现部分分离，使它们都可以独立地变化。",
    ),
    entry(
        "composite",
        Category::Structural,
        "🌿",
        "Composite",
        "组合",
        "Builds hierarchical, recursive tree structures where every element can be used \
         in the same way.",
        "将对象组合成树形结构以表示部分-整体的层次结构，使单个对象和组合对象的使用具有一致性。",
    ),
    entry(
        "decorator",
        Category::Structural,
        "🍧",
        "Decorator",
        "修饰",
        "Extends or alters an object's behaviour at run-time by wrapping it in a decorator.",
        "动态地往一个对象中添加新的行为，比生成子类更为灵活。",
    ),
    entry(
        "facade",
        Category::Structural,
        "🎁",
        "Façade",
        "外观",
        "Defines a simplified interface to a more complex subsystem.",
        "为子系统中的一组接口提供一个统一的高层接口，使得子系统更容易使用。",
    ),
    entry(
        "flyweight",
        Category::Structural,
        "🍃",
        "Flyweight",
        "享元",
        "Minimizes memory usage by sharing as much as possible with similar objects.",
        "使用共享对象，尽可能减少内存使用量，并把信息分享给尽可能多的相似对象。",
    ),
    entry(
        "protection-proxy",
        Category::Structural,
        "☔",
        "Protection Proxy",
        "保护代理",
        "Provides a surrogate for an underlying object and restricts access to it.",
        "创建一个代表底层对象的代理，并用它来限制访问。",
    ),
    entry(
        "virtual-proxy",
        Category::Structural,
        "🍬",
        "Virtual Proxy",
        "虚拟代理",
        "Provides a surrogate for an underlying object and loads it on demand.",
        "创建一个代表底层对象的代理，在需要时才加载底层对象。",
    ),
];

pub fn catalog() -> &'static [PatternInfo] {
    &PATTERNS
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternInfo> {
    PATTERNS.iter().filter(move |info| info.category == category)
}

pub fn find(slug: &str) -> Option<&'static PatternInfo> {
    PATTERNS.iter().find(|info| info.slug == slug)
}

/// Walkthrough banner for `slug`, empty when the slug is unknown.
pub fn section_banner(slug: &str, locale: Locale) -> String {
    find(slug)
        .map(|info| info.banner(locale))
        .unwrap_or_default()
}

/// Markdown table of contents, one section per category.
pub fn render_index(locale: Locale) -> String {
    let mut out = String::new();
    for (i, category) in Category::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "## {}", category.title(locale));
        let _ = writeln!(out);
        let _ = writeln!(out, "> {}", category.description(locale));
        let _ = writeln!(out);
        for info in by_category(category) {
            let _ = writeln!(out, "* {}", info.heading(locale));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(catalog().len(), 25);
        assert_eq!(by_category(Category::Behavioral).count(), 11);
        assert_eq!(by_category(Category::Creational).count(), 6);
        assert_eq!(by_category(Category::Structural).count(), 8);
    }

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<_> = catalog().iter().map(|info| info.slug).collect();
        assert_eq!(slugs.len(), catalog().len());
    }

    #[test]
    fn test_find() {
        let info = find("chain-of-responsibility").unwrap();
        assert_eq!(info.category, Category::Behavioral);
        assert_eq!(info.title(Locale::Zh), "责任链");
        assert!(find("god-object").is_none());
    }

    #[test]
    fn test_render_index_en() {
        let index = render_index(Locale::En);
        assert!(index.starts_with("## Behavioral\n\n> "));
        assert!(index.contains(&format!("> {}\n", Category::Creational.description(Locale::En))));
        assert!(index.contains("* 🍧 Decorator\n"));
        assert!(index.contains("## Structural\n"));
    }

    #[test]
    fn test_heading_line_and_banner() {
        let info = find("singleton").unwrap();
        assert_eq!(info.heading_line(Locale::En), "=== 💍 Singleton ===");
        assert_eq!(info.heading_line(Locale::Zh), "=== 💍 单例 ===");

        let banner = section_banner("singleton", Locale::En);
        assert!(banner.contains("=== 💍 Singleton ==="));
        assert!(banner.contains(info.summary(Locale::En)));
        assert!(section_banner("god-object", Locale::En).is_empty());
    }

    #[test]
    fn test_render_index_zh() {
        let index = render_index(Locale::Zh);
        assert!(index.contains("## 创建型模式\n"));
        assert!(index.contains("* 💍 单例\n"));
    }

    #[test]
    fn test_locale_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let parsed: Wrapper = toml::from_str("locale = \"zh\"").unwrap();
        assert_eq!(parsed.locale, Locale::Zh);
    }
}
