use folio_extern_contracts::dispatch::MockMessageDispatcher;
use folio_shared_contracts::time::MockTimeService;

use crate::ContactServiceImpl;


type Sut = ContactServiceImpl<MockTimeService, MockMessageDispatcher>;
