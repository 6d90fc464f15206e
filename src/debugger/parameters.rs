use super::CommandClass;
use crate::error::{BacktraceError, Result};
use std::collections::BTreeMap;
use tracing::info;

/// A named boolean setting toggled with `set NAME on|off`.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub class: CommandClass,
    pub doc: String,
    pub set_doc: String,
    pub show_doc: String,
    value: bool,
}

impl Parameter {
    pub fn new(name: &str, class: CommandClass, value: bool) -> Self {
        Self {
            name: name.to_string(),
            class,
            doc: String::new(),
            set_doc: String::new(),
            show_doc: String::new(),
            value,
        }
    }

    pub fn with_docs(mut self, doc: &str, set_doc: &str, show_doc: &str) -> Self {
        self.doc = doc.to_string();
        self.set_doc = set_doc.to_string();
        self.show_doc = show_doc.to_string();
        self
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

pub fn parse_bool(text: &str) -> Result<bool> {
    match text.to_ascii_lowercase().as_str() {
        "on" | "1" | "yes" | "enable" | "true" => Ok(true),
        "off" | "0" | "no" | "disable" | "false" => Ok(false),
        _ => Err(BacktraceError::usage("\"on\" or \"off\" expected.")),
    }
}

#[derive(Debug, Default)]
pub struct Parameters {
    params: BTreeMap<String, Parameter>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, param: Parameter) {
        info!(parameter = %param.name, value = param.value, "parameter registered");
        self.params.insert(param.name.clone(), param);
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    pub fn value(&self, name: &str) -> Option<bool> {
        self.params.get(name).map(Parameter::value)
    }

    pub fn set(&mut self, name: &str, value: bool) -> Result<()> {
        let param = self
            .params
            .get_mut(name)
            .ok_or_else(|| BacktraceError::usage(format!("No parameter named \"{}\".", name)))?;
        param.value = value;
        info!(parameter = %name, value, "parameter changed");
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }
}
