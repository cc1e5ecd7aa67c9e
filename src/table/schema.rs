use anyhow::{Result, bail};
use clap::ValueEnum;

use super::RawRow;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Name,
    Kind,
    Region,
    Intro,
    Reason,
    ImagePath,
    Segment,
    Jobs,
}

impl Field {
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["企业名称", "✅企业名称"],
            Self::Kind => &["企业类型", "✅企业类型"],
            Self::Region => &["地区", "✅地区"],
            Self::Intro => &["企业简介", "✅企业简介"],
            Self::Reason => &["推荐理由", "✅推荐理由"],
            Self::ImagePath => &["图片路径", "✅图片路径"],
            Self::Segment => &["业务板块/主要业务", "✅业务板块/主要业务"],
            Self::Jobs => &["关联岗位", "✅关联岗位"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "type",
            Self::Region => "region",
            Self::Intro => "intro",
            Self::Reason => "reason",
            Self::ImagePath => "image_path",
            Self::Segment => "segment",
            Self::Jobs => "jobs",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TableKind {
    Profile,
    Images,
    Business,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Images => "images",
            Self::Business => "business",
        }
    }

    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Self::Profile => &[Field::Name],
            Self::Images => &[Field::Name, Field::ImagePath],
            Self::Business => &[Field::Name, Field::Segment],
        }
    }

    pub fn optional_fields(self) -> &'static [Field] {
        match self {
            Self::Profile => &[Field::Kind, Field::Region, Field::Intro, Field::Reason],
            Self::Images => &[],
            Self::Business => &[Field::Jobs],
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<(Field, usize)>,
}

impl TableSchema {
    pub fn resolve(kind: TableKind, headers: &[String]) -> Result<Self> {
        let mut columns = Vec::new();

        for &field in kind.required_fields() {
            match find_column(headers, field) {
                Some(index) => columns.push((field, index)),
                None => bail!(
                    "{} table header has no {} column (expected one of {:?}, found {:?})",
                    kind.as_str(),
                    field.as_str(),
                    field.aliases(),
                    headers
                ),
            }
        }

        for &field in kind.optional_fields() {
            if let Some(index) = find_column(headers, field) {
                columns.push((field, index));
            }
        }

        Ok(Self { columns })
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, index)| *index)
    }

    pub fn field_at(&self, column: usize) -> Option<Field> {
        self.columns
            .iter()
            .find(|(_, index)| *index == column)
            .map(|(field, _)| *field)
    }

    pub fn value<'a>(&self, row: &'a RawRow, field: Field) -> &'a str {
        self.column(field).map(|index| row.cell(index)).unwrap_or("")
    }
}

fn find_column(headers: &[String], field: Field) -> Option<usize> {
    field
        .aliases()
        .iter()
        .find_map(|alias| headers.iter().position(|header| header == alias))
}
