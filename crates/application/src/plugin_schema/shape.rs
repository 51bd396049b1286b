use airone_domain::{
    AttrType, EntityAttrStructure, EntityReferral, EntityStructure, Issue, IssueCode, IssuePath,
};
use serde_json::{Map, Value};

/// Reads a raw JSON value into an [`EntityStructure`], collecting every shape
/// issue instead of stopping at the first one. Unknown keys are ignored.
pub(super) fn parse_entity_structure(value: &Value) -> Result<EntityStructure, Vec<Issue>> {
    let mut reader = ShapeReader::default();
    let root = IssuePath::root();

    let Some(object) = reader.object(Some(value), &root) else {
        return Err(reader.issues);
    };

    let id = reader.integer(object, "id", &root);
    let name = reader.string(object, "name", &root);
    let attrs = reader.list(object, "attrs", &root, |reader, item, path| {
        reader.attr(item, &path)
    });

    match (id, name, attrs) {
        (Some(id), Some(name), Some(attrs)) if reader.issues.is_empty() => {
            Ok(EntityStructure::new(id, name, attrs))
        }
        _ => Err(reader.issues),
    }
}

#[derive(Default)]
struct ShapeReader {
    issues: Vec<Issue>,
}

impl ShapeReader {
    fn attr(&mut self, value: &Value, path: &IssuePath) -> Option<EntityAttrStructure> {
        let object = self.object(Some(value), path)?;

        let id = self.integer(object, "id", path);
        let name = self.string(object, "name", path);
        let attr_type = self.attr_type(object, "type", path);
        let is_mandatory = self.boolean(object, "isMandatory", path);
        let referral = self.list(object, "referral", path, |reader, item, path| {
            reader.referral(item, &path)
        });

        Some(EntityAttrStructure::new(
            id?,
            name?,
            attr_type?,
            is_mandatory?,
            referral?,
        ))
    }

    fn referral(&mut self, value: &Value, path: &IssuePath) -> Option<EntityReferral> {
        let object = self.object(Some(value), path)?;

        let id = self.integer(object, "id", path);
        let name = self.string(object, "name", path);

        Some(EntityReferral::new(id?, name?))
    }

    fn object<'a>(
        &mut self,
        value: Option<&'a Value>,
        path: &IssuePath,
    ) -> Option<&'a Map<String, Value>> {
        match value {
            Some(Value::Object(object)) => Some(object),
            other => {
                self.invalid_type(path.clone(), "object", other);
                None
            }
        }
    }

    fn integer(&mut self, object: &Map<String, Value>, key: &str, path: &IssuePath) -> Option<i64> {
        let value = object.get(key);
        if let Some(integer) = value.and_then(Value::as_i64) {
            return Some(integer);
        }

        self.invalid_type(path.clone().key(key), "integer", value);
        None
    }

    fn attr_type(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &IssuePath,
    ) -> Option<AttrType> {
        let value = object.get(key);
        if let Some(code) = value
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
        {
            return Some(AttrType::from_code(code));
        }

        self.invalid_type(path.clone().key(key), "attribute type code", value);
        None
    }

    fn string(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &IssuePath,
    ) -> Option<String> {
        match object.get(key) {
            Some(Value::String(text)) => Some(text.clone()),
            other => {
                self.invalid_type(path.clone().key(key), "string", other);
                None
            }
        }
    }

    fn boolean(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &IssuePath,
    ) -> Option<bool> {
        match object.get(key) {
            Some(Value::Bool(flag)) => Some(*flag),
            other => {
                self.invalid_type(path.clone().key(key), "boolean", other);
                None
            }
        }
    }

    /// Reads every element even after a failure so that all element issues
    /// are reported.
    fn list<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        path: &IssuePath,
        mut read_item: impl FnMut(&mut Self, &Value, IssuePath) -> Option<T>,
    ) -> Option<Vec<T>> {
        let list_path = path.clone().key(key);
        let items = match object.get(key) {
            Some(Value::Array(items)) => items,
            other => {
                self.invalid_type(list_path, "array", other);
                return None;
            }
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut complete = true;
        for (index, item) in items.iter().enumerate() {
            match read_item(self, item, list_path.clone().index(index)) {
                Some(value) => parsed.push(value),
                None => complete = false,
            }
        }

        complete.then_some(parsed)
    }

    fn invalid_type(&mut self, path: IssuePath, expected: &str, received: Option<&Value>) {
        let message = match received {
            None => "Required".to_owned(),
            Some(value) => format!("Expected {expected}, received {}", describe(value)),
        };
        self.issues
            .push(Issue::new(IssueCode::InvalidType, path, message));
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
