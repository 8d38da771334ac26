use clap::ValueEnum;

use iconsmith_naming::CaseMode;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum CaseModeFlag {
    #[value(name = "camelCase")]
    CamelCase,
    #[value(name = "PascalCase")]
    PascalCase,
    #[value(name = "snake_case")]
    SnakeCase,
    #[value(name = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
    #[value(name = "raw")]
    Raw,
}

impl CaseModeFlag {
    pub(crate) const fn as_domain(self) -> CaseMode {
        match self {
            CaseModeFlag::CamelCase => CaseMode::Camel,
            CaseModeFlag::PascalCase => CaseMode::Pascal,
            CaseModeFlag::SnakeCase => CaseMode::Snake,
            CaseModeFlag::ScreamingSnakeCase => CaseMode::ScreamingSnake,
            CaseModeFlag::Raw => CaseMode::Raw,
        }
    }
}
