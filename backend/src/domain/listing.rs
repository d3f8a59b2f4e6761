//! Resolution of raw list parameters into a page request and sort order.
//!
//! Resolution never touches storage. Callers count the collection, resolve
//! the window, then load the slice.

use pagination::{DEFAULT_PAGE, DEFAULT_SIZE, PageRequest, Sort, SortDirection};

use super::error::{EntityKind, Error};

/// Sortable properties of one entity kind.
pub trait SortField: Copy + Sized + 'static {
    /// Collection the fields belong to.
    const KIND: EntityKind;
    /// Every sortable field; the first one is the primary key.
    const ALL: &'static [Self];

    /// Wire name accepted in `sortBy`.
    fn name(self) -> &'static str;

    /// Field used when `sortBy` is absent.
    fn primary() -> Self;

    /// Look a field up by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Raw listing parameters as received from the client.
///
/// # Examples
/// ```
/// use photos::domain::{ListParams, PhotoSortField};
///
/// let params = ListParams {
///     sort_by: Some("views".to_owned()),
///     sort_order: Some("desc".to_owned()),
///     ..ListParams::default()
/// };
/// let (request, sort) = params.resolve::<PhotoSortField>().expect("valid params");
/// assert_eq!(request.page(), 0);
/// assert_eq!(sort.field(), PhotoSortField::Views);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Zero-based page index; defaults to 0.
    pub page: Option<i64>,
    /// Page size; defaults to 10.
    pub size: Option<i64>,
    /// Property name; defaults to the primary key.
    pub sort_by: Option<String>,
    /// `asc` or `desc`; defaults to `asc`.
    pub sort_order: Option<String>,
}

impl ListParams {
    /// Validate the parameters for the collection identified by `F`.
    ///
    /// The sort order is checked first, then the sort field, then the page
    /// bounds.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unknown order or a negative page or
    /// non-positive size; [`Error::UnresolvableSortField`] for an unknown
    /// property.
    pub fn resolve<F: SortField>(&self) -> Result<(PageRequest, Sort<F>), Error> {
        let direction = match self.sort_order.as_deref() {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        let field = match self.sort_by.as_deref() {
            Some(name) => {
                F::from_name(name).ok_or_else(|| Error::unresolvable_sort_field(F::KIND, name))?
            }
            None => F::primary(),
        };
        let request = PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_SIZE),
        )?;
        Ok((request, Sort::new(field, direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ProbeField {
        Id,
        Name,
    }

    impl SortField for ProbeField {
        const KIND: EntityKind = EntityKind::User;
        const ALL: &'static [Self] = &[Self::Id, Self::Name];

        fn name(self) -> &'static str {
            match self {
                Self::Id => "id",
                Self::Name => "name",
            }
        }

        fn primary() -> Self {
            Self::Id
        }
    }

    fn params(sort_by: Option<&str>, sort_order: Option<&str>) -> ListParams {
        ListParams {
            sort_by: sort_by.map(str::to_owned),
            sort_order: sort_order.map(str::to_owned),
            ..ListParams::default()
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten_by_primary_key_ascending() {
        let (request, sort) = ListParams::default()
            .resolve::<ProbeField>()
            .expect("defaults resolve");
        assert_eq!((request.page(), request.size()), (0, 10));
        assert_eq!(sort.field(), ProbeField::Id);
        assert_eq!(sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn resolves_named_field_and_direction() {
        let (_, sort) = params(Some("name"), Some("desc"))
            .resolve::<ProbeField>()
            .expect("valid params");
        assert_eq!(sort.field(), ProbeField::Name);
        assert_eq!(sort.direction(), SortDirection::Descending);
    }

    #[test]
    fn unknown_order_is_reported_before_unknown_field() {
        let err = params(Some("colour"), Some("sideways"))
            .resolve::<ProbeField>()
            .expect_err("both invalid");
        assert!(
            matches!(&err, Error::InvalidArgument { message } if message.contains("'sideways'"))
        );
    }

    #[rstest]
    #[case("colour")]
    #[case("NAME")]
    #[case("")]
    fn unknown_field_is_unresolvable(#[case] field: &str) {
        let err = params(Some(field), None)
            .resolve::<ProbeField>()
            .expect_err("unknown field");
        assert_eq!(err, Error::unresolvable_sort_field(EntityKind::User, field));
    }

    #[rstest]
    #[case(Some(-1), None)]
    #[case(None, Some(0))]
    #[case(None, Some(-10))]
    fn bad_page_bounds_are_invalid_arguments(#[case] page: Option<i64>, #[case] size: Option<i64>) {
        let err = ListParams {
            page,
            size,
            ..ListParams::default()
        }
        .resolve::<ProbeField>()
        .expect_err("bad bounds");
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
