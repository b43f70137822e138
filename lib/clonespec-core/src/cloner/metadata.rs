use super::DeepClone;
use crate::model::{Contact, Info, License, Server, ServerVariable, Tag, XLogo, XTagGroup};

impl DeepClone for Info {
    fn deep_clone(&self) -> Self {
        let Self {
            title,
            description,
            terms_of_service,
            contact,
            license,
            version,
            x_logo,
        } = self;
        Self {
            title: title.deep_clone(),
            description: description.deep_clone(),
            terms_of_service: terms_of_service.deep_clone(),
            contact: contact.deep_clone(),
            license: license.deep_clone(),
            version: version.deep_clone(),
            x_logo: x_logo.deep_clone(),
        }
    }
}

impl DeepClone for Contact {
    fn deep_clone(&self) -> Self {
        let Self { name, url, email } = self;
        Self {
            name: name.deep_clone(),
            url: url.deep_clone(),
            email: email.deep_clone(),
        }
    }
}

impl DeepClone for License {
    fn deep_clone(&self) -> Self {
        let Self { name, url } = self;
        Self {
            name: name.deep_clone(),
            url: url.deep_clone(),
        }
    }
}

impl DeepClone for XLogo {
    fn deep_clone(&self) -> Self {
        let Self {
            url,
            background_color,
            alt_text,
            href,
        } = self;
        Self {
            url: url.deep_clone(),
            background_color: background_color.deep_clone(),
            alt_text: alt_text.deep_clone(),
            href: href.deep_clone(),
        }
    }
}

impl DeepClone for Server {
    fn deep_clone(&self) -> Self {
        let Self {
            url,
            description,
            variables,
        } = self;
        Self {
            url: url.deep_clone(),
            description: description.deep_clone(),
            variables: variables.deep_clone(),
        }
    }
}

impl DeepClone for ServerVariable {
    fn deep_clone(&self) -> Self {
        let Self {
            enum_values,
            default,
            description,
        } = self;
        Self {
            enum_values: enum_values.deep_clone(),
            default: default.deep_clone(),
            description: description.deep_clone(),
        }
    }
}

impl DeepClone for Tag {
    fn deep_clone(&self) -> Self {
        let Self { name, description } = self;
        Self {
            name: name.deep_clone(),
            description: description.deep_clone(),
        }
    }
}

impl DeepClone for XTagGroup {
    fn deep_clone(&self) -> Self {
        let Self { name, tags } = self;
        Self {
            name: name.deep_clone(),
            tags: tags.deep_clone(),
        }
    }
}
